use crate::app::accommodation_store::AccommodationStore;
use crate::domain::catalog::DestinationCatalog;
use crate::domain::model::Destination;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::ToSchema;

pub const NOT_FOUND_MESSAGE: &str = "Accommodation not found";
pub const DELETED_MESSAGE: &str = "Accommodation deleted successfully";
pub const WELCOME_MESSAGE: &str = "Welcome to Travel Wish!";

#[derive(Clone)]
pub struct AppState {
    /// Reads take the shared side; create/update/delete take the exclusive side.
    pub store: Arc<RwLock<AccommodationStore>>,
    pub catalog: Arc<DestinationCatalog>,
}

impl AppState {
    pub fn new(store: AccommodationStore, catalog: DestinationCatalog) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            catalog: Arc::new(catalog),
        }
    }
}

/// Body used for confirmations and every error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HomeResponse {
    pub message: String,
    #[serde(rename = "featuredDestinations")]
    pub featured_destinations: Vec<Destination>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of accommodations currently held.
    pub accommodations: usize,
}

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<MessageResponse>);

/// `body_text` carries the serde path of the offending field (e.g. `name: invalid type ...`).
pub fn json_422(err: JsonRejection) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(MessageResponse::new(format!(
            "Invalid JSON body: {}",
            err.body_text()
        ))),
    )
}
