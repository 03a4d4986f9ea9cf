use serde::{Deserialize, Serialize};

// Response for a counted (or read) listen total
#[derive(Deserialize, Serialize, Clone)]
pub struct ListenResponse {
    pub podcast_id: String,
    pub listens: u64,
    pub counted: bool,
}

// Body of a 429 when the throttle denies
#[derive(Deserialize, Serialize, Clone)]
pub struct ThrottledResponse {
    pub podcast_id: String,
    pub reason: String,
}
