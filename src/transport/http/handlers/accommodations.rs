use crate::domain::model::{Accommodation, AccommodationFields};
use crate::infra::logging::{debug, info, warn};
use crate::transport::http::handlers::common::{parse_id, store_error};
use crate::transport::http::types::{
    json_422, ApiError, AppState, MessageResponse, DELETED_MESSAGE,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/accommodations",
    responses(
        (status = 200, description = "All accommodations in insertion order", body = [Accommodation])
    )
)]
pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<Accommodation>> {
    let store = state.store.read().await;
    debug!(count = store.len(), "listing accommodations");
    Json(store.list().to_vec())
}

#[utoipa::path(
    get,
    path = "/api/accommodations/{id}",
    params(
        ("id" = u64, Path, description = "Accommodation id")
    ),
    responses(
        (status = 200, description = "The accommodation", body = Accommodation),
        (status = 400, description = "Id is not a number", body = MessageResponse),
        (status = 404, description = "No accommodation with this id", body = MessageResponse)
    )
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Accommodation>, ApiError> {
    let id = parse_id(&raw_id)?;
    let store = state.store.read().await;
    let record = store.get(id).map_err(store_error)?;
    Ok(Json(record.clone()))
}

#[utoipa::path(
    post,
    path = "/api/accommodations",
    request_body = AccommodationFields,
    responses(
        (status = 201, description = "Accommodation created", body = Accommodation),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = MessageResponse)
    )
)]
pub async fn create_handler(
    State(state): State<AppState>,
    request: Result<Json<AccommodationFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Accommodation>), ApiError> {
    let Json(fields) = request.map_err(reject_body)?;

    let mut store = state.store.write().await;
    let record = store.create(fields);
    info!(id = record.id, total = store.len(), "accommodation created");
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    put,
    path = "/api/accommodations/{id}",
    params(
        ("id" = u64, Path, description = "Accommodation id")
    ),
    request_body = AccommodationFields,
    responses(
        (status = 200, description = "Accommodation updated; omitted fields keep their values", body = Accommodation),
        (status = 400, description = "Id is not a number", body = MessageResponse),
        (status = 404, description = "No accommodation with this id", body = MessageResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = MessageResponse)
    )
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    request: Result<Json<AccommodationFields>, JsonRejection>,
) -> Result<Json<Accommodation>, ApiError> {
    let id = parse_id(&raw_id)?;
    let Json(fields) = request.map_err(reject_body)?;

    let mut store = state.store.write().await;
    let record = store.update(id, fields).map_err(store_error)?;
    info!(id, "accommodation updated");
    Ok(Json(record))
}

#[utoipa::path(
    delete,
    path = "/api/accommodations/{id}",
    params(
        ("id" = u64, Path, description = "Accommodation id")
    ),
    responses(
        (status = 200, description = "Accommodation deleted", body = MessageResponse),
        (status = 400, description = "Id is not a number", body = MessageResponse),
        (status = 404, description = "No accommodation with this id", body = MessageResponse)
    )
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&raw_id)?;

    let mut store = state.store.write().await;
    store.delete(id).map_err(store_error)?;
    info!(id, total = store.len(), "accommodation deleted");
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}

fn reject_body(err: JsonRejection) -> ApiError {
    warn!(error = %err, "rejected accommodation body");
    json_422(err)
}
