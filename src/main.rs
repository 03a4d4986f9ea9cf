use axum::{
    Router,
    routing::{get, post},
};
use chrono::TimeDelta;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

mod config;
mod error;
mod handlers;
mod metrics;
mod models;
mod state;
mod throttle;
mod worker;

use config::Args;
use state::AppState;
use throttle::ListenThrottle;

// this is main async function with tokio
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listen_counter=info".into()),
        )
        .init();

    // parse cli arguments
    let args = Args::parse();

    let throttle = ListenThrottle::new(
        args.daily_quota,
        TimeDelta::seconds(args.cooldown_secs as i64),
    );

    // creating shared state
    let state = Arc::new(AppState::new(throttle));

    // spawn the background sweeper
    let sweep_state = Arc::clone(&state);
    let sweep_interval = Duration::from_secs(args.sweep_interval);
    tokio::spawn(async move {
        worker::sweep_worker(sweep_state, sweep_interval).await;
    });

    // creating the router with routes
    let app = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/podcasts/{id}/listen", post(handlers::listen_handler))
        .route("/api/podcasts/{id}/listens", get(handlers::get_listens_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("listen counter running on http://localhost:{}", args.port);
    tracing::info!(
        "throttle policy: {} listens per key per UTC day, {}s cooldown",
        args.daily_quota,
        args.cooldown_secs
    );
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
