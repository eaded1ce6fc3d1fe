use crate::domain::model::{Accommodation, AccommodationFields, Destination};
use crate::transport::http::handlers::{accommodations, health, home};
use crate::transport::http::types::{AppState, HealthResponse, HomeResponse, MessageResponse};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        home::home_handler,
        health::healthcheck_handler,
        accommodations::list_handler,
        accommodations::get_handler,
        accommodations::create_handler,
        accommodations::update_handler,
        accommodations::delete_handler
    ),
    components(schemas(
        Accommodation,
        AccommodationFields,
        Destination,
        HomeResponse,
        HealthResponse,
        MessageResponse
    ))
)]
pub struct ApiDoc;

/// Answers cross-origin requests from any origin, for any method and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/accommodations",
            get(accommodations::list_handler).post(accommodations::create_handler),
        )
        .route(
            "/api/accommodations/:id",
            get(accommodations::get_handler)
                .put(accommodations::update_handler)
                .delete(accommodations::delete_handler),
        )
        .layer(cors_layer())
        .with_state(app_state)
}
