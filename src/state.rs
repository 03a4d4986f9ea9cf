use crate::throttle::ListenThrottle;
use dashmap::DashMap;

// app's shared state
pub struct AppState {
    pub throttle: ListenThrottle,
    // in-memory listen counters per podcast id; the persistent podcast store
    // lives outside this service, this table stands in for its counter column
    pub listens: DashMap<String, u64>,
}

impl AppState {
    pub fn new(throttle: ListenThrottle) -> Self {
        Self {
            throttle,
            listens: DashMap::new(),
        }
    }
}
