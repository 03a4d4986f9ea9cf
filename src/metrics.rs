use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, register_counter, register_gauge};

lazy_static! {
    pub static ref LISTEN_REQUESTS_TOTAL: Counter = register_counter!(
        "listen_requests_total",
        "Total number of listen requests received"
    )
    .unwrap();
    pub static ref LISTENS_COUNTED: Counter = register_counter!(
        "listens_counted_total",
        "Listen requests that passed the throttle and incremented a counter"
    )
    .unwrap();
    pub static ref LISTENS_DENIED_QUOTA: Counter = register_counter!(
        "listens_denied_quota_total",
        "Listen requests denied by the daily quota"
    )
    .unwrap();
    pub static ref LISTENS_DENIED_COOLDOWN: Counter = register_counter!(
        "listens_denied_cooldown_total",
        "Listen requests denied by the cooldown window"
    )
    .unwrap();
    pub static ref THROTTLE_ENTRIES: Gauge = register_gauge!(
        "throttle_entries",
        "Current number of entries in the throttle table"
    )
    .unwrap();
}
