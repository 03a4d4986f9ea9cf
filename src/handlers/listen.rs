use axum::{
    Json,
    extract::{ConnectInfo, Path, State},
};
use chrono::Utc;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::error::AppError;
use crate::metrics::{
    LISTEN_REQUESTS_TOTAL, LISTENS_COUNTED, LISTENS_DENIED_COOLDOWN, LISTENS_DENIED_QUOTA,
    THROTTLE_ENTRIES,
};
use crate::models::ListenResponse;
use crate::state::AppState;
use crate::throttle::{Decision, DenyReason};

// POST handler - count one listen for a podcast, subject to the throttle.
// The client identity is the peer address; the resource is the path id.
pub async fn listen_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path(podcast_id): Path<String>,
) -> Result<Json<ListenResponse>, AppError> {
    LISTEN_REQUESTS_TOTAL.inc();

    let client = addr.ip().to_string();
    let decision = state.throttle.authorize(&client, &podcast_id, Utc::now())?;

    match decision {
        Decision::Allowed => {
            // the throttle authorized this increment, perform it
            let listens = {
                let mut count = state.listens.entry(podcast_id.clone()).or_insert(0);
                *count += 1;
                *count
            };
            LISTENS_COUNTED.inc();
            THROTTLE_ENTRIES.set(state.throttle.len() as f64);
            tracing::debug!(%client, %podcast_id, listens, "listen counted");
            Ok(Json(ListenResponse {
                podcast_id,
                listens,
                counted: true,
            }))
        }
        Decision::Denied(reason) => {
            match reason {
                DenyReason::Quota => LISTENS_DENIED_QUOTA.inc(),
                DenyReason::Cooldown => LISTENS_DENIED_COOLDOWN.inc(),
            }
            tracing::debug!(%client, %podcast_id, %reason, "listen throttled");
            Err(AppError::Throttled { podcast_id, reason })
        }
    }
}

// GET handler - read the current listen total (0 for an unseen podcast)
pub async fn get_listens_handler(
    State(state): State<Arc<AppState>>,
    Path(podcast_id): Path<String>,
) -> Json<ListenResponse> {
    let listens = state.listens.get(&podcast_id).map(|c| *c).unwrap_or(0);
    Json(ListenResponse {
        podcast_id,
        listens,
        counted: false,
    })
}
