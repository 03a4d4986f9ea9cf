mod health;
mod listen;
mod metrics;

pub use health::health_handler;
pub use listen::{get_listens_handler, listen_handler};
pub use metrics::metrics_handler;
