use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "listen-counter")]
#[command(about = "Throttled listen counter service for podcast episodes")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Max counted listens per (client, episode) per UTC day
    #[arg(long, default_value_t = 2)]
    pub daily_quota: u32,

    // Minimum seconds between two counted listens for the same key
    #[arg(long, default_value_t = 7200)]
    pub cooldown_secs: u64,

    // How often the stale-entry sweep runs, in seconds
    #[arg(long, default_value_t = 600)]
    pub sweep_interval: u64,
}
