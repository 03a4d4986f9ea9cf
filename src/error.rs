use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::throttle::{DenyReason, ThrottleError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    InvalidKey(#[from] ThrottleError),

    #[error("listen not counted: {reason}")]
    Throttled { podcast_id: String, reason: DenyReason },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidKey(err) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            AppError::Throttled { podcast_id, reason } => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(crate::models::ThrottledResponse {
                    podcast_id,
                    reason: reason.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
