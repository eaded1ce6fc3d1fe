use crate::app::accommodation_store::StoreError;
use crate::infra::logging::{debug, warn};
use crate::transport::http::types::{ApiError, MessageResponse, NOT_FOUND_MESSAGE};
use axum::http::StatusCode;
use axum::Json;

/// Parses an `:id` path segment. Anything that is not a non-negative integer is a 400.
pub fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.trim().parse::<u64>().map_err(|_| {
        warn!(segment = raw, "rejected non-numeric accommodation id");
        (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new(format!(
                "Invalid accommodation id: {}",
                raw
            ))),
        )
    })
}

pub fn store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::NotFound(id) => {
            debug!(id, "accommodation not found");
            (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new(NOT_FOUND_MESSAGE)),
            )
        }
    }
}
