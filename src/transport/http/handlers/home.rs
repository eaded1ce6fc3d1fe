use crate::transport::http::types::{AppState, HomeResponse, WELCOME_MESSAGE};
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message and featured destinations", body = HomeResponse)
    )
)]
pub async fn home_handler(State(state): State<AppState>) -> Json<HomeResponse> {
    Json(HomeResponse {
        message: WELCOME_MESSAGE.to_string(),
        featured_destinations: state.catalog.list().to_vec(),
    })
}
