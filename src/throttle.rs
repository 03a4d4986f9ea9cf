use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use thiserror::Error;

// Throttle key - one entry per (client, resource) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThrottleKey {
    pub client: String,
    pub resource: String,
}

// Throttle entry - created on the first allowed listen, mutated only by
// allowed listens. Denied calls never touch it.
#[derive(Debug, Clone)]
pub struct ThrottleEntry {
    pub count_today: u32,
    pub last_authorized_at: DateTime<Utc>,
}

// Outcome of an authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(DenyReason),
}

// Which gate denied - quota and cooldown are checked in that fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    Quota,
    Cooldown,
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DenyReason::Quota => write!(f, "daily listen limit reached"),
            DenyReason::Cooldown => write!(f, "listen cooldown active"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ThrottleError {
    #[error("empty {0} identifier")]
    InvalidKey(&'static str),
}

// Per-(client, resource) listen throttle: a daily quota stacked with a
// cooldown window between consecutive allowed listens. Day boundaries are
// UTC calendar days.
pub struct ListenThrottle {
    entries: DashMap<ThrottleKey, ThrottleEntry>,
    daily_quota: u32,
    cooldown: TimeDelta,
}

impl ListenThrottle {
    pub fn new(daily_quota: u32, cooldown: TimeDelta) -> Self {
        Self {
            entries: DashMap::new(),
            daily_quota,
            cooldown,
        }
    }

    // Decide whether a counter increment for (client, resource) may proceed
    // at `now`, and record it if so. The read-modify-write is atomic per key:
    // the dashmap entry guard holds the shard lock for the whole check.
    pub fn authorize(
        &self,
        client: &str,
        resource: &str,
        now: DateTime<Utc>,
    ) -> Result<Decision, ThrottleError> {
        if client.is_empty() {
            return Err(ThrottleError::InvalidKey("client"));
        }
        if resource.is_empty() {
            return Err(ThrottleError::InvalidKey("resource"));
        }

        let key = ThrottleKey {
            client: client.to_string(),
            resource: resource.to_string(),
        };

        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();

                // day rolled over? quota starts fresh (persisted on write below)
                let effective_count =
                    if entry.last_authorized_at.date_naive() != now.date_naive() {
                        0
                    } else {
                        entry.count_today
                    };

                if effective_count >= self.daily_quota {
                    return Ok(Decision::Denied(DenyReason::Quota));
                }
                if now - entry.last_authorized_at < self.cooldown {
                    return Ok(Decision::Denied(DenyReason::Cooldown));
                }

                entry.count_today = effective_count + 1;
                entry.last_authorized_at = now;
                Ok(Decision::Allowed)
            }
            Entry::Vacant(vacant) => {
                if self.daily_quota == 0 {
                    return Ok(Decision::Denied(DenyReason::Quota));
                }
                // never-seen key: quota available, no cooldown running
                vacant.insert(ThrottleEntry {
                    count_today: 1,
                    last_authorized_at: now,
                });
                Ok(Decision::Allowed)
            }
        }
    }

    // Drop entries that can no longer influence a decision: cooldown elapsed
    // and last activity on an earlier UTC day. Returns how many were removed.
    pub fn sweep(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| {
            now - entry.last_authorized_at < self.cooldown
                || entry.last_authorized_at.date_naive() == now.date_naive()
        });
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
