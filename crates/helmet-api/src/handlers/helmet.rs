//! Helmet CRUD and listing handlers.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::dto::request::{CreateHelmetRequest, UpdateHelmetRequest};
use crate::dto::response::{HelmetEnvelope, HelmetListEnvelope, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{HelmetId, JsonBody, ListParams};
use crate::state::AppState;

/// GET /v1/mhelmets?name=&material=&protection=&page=&page_size=&sort=
pub async fn list_helmets(
    State(state): State<AppState>,
    ListParams(params): ListParams,
) -> Result<Json<HelmetListEnvelope>, ApiError> {
    let (helmets, metadata) = state.helmet_service.list(params).await?;
    Ok(Json(HelmetListEnvelope { helmets, metadata }))
}

/// POST /v1/mhelmets
pub async fn create_helmet(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateHelmetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let helmet = state.helmet_service.create(req).await?;
    let location = format!("/v1/mhelmets/{}", helmet.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(HelmetEnvelope { helmet }),
    ))
}

/// GET /v1/mhelmets/{id}
pub async fn show_helmet(
    State(state): State<AppState>,
    HelmetId(id): HelmetId,
) -> Result<Json<HelmetEnvelope>, ApiError> {
    let helmet = state.helmet_service.show(id).await?;
    Ok(Json(HelmetEnvelope { helmet }))
}

/// PUT /v1/mhelmets/{id}
pub async fn replace_helmet(
    State(state): State<AppState>,
    HelmetId(id): HelmetId,
    JsonBody(req): JsonBody<CreateHelmetRequest>,
) -> Result<Json<HelmetEnvelope>, ApiError> {
    let helmet = state.helmet_service.replace(id, req).await?;
    Ok(Json(HelmetEnvelope { helmet }))
}

/// PATCH /v1/mhelmets/{id}
pub async fn patch_helmet(
    State(state): State<AppState>,
    HelmetId(id): HelmetId,
    JsonBody(req): JsonBody<UpdateHelmetRequest>,
) -> Result<Json<HelmetEnvelope>, ApiError> {
    let helmet = state.helmet_service.patch(id, req).await?;
    Ok(Json(HelmetEnvelope { helmet }))
}

/// DELETE /v1/mhelmets/{id}
pub async fn delete_helmet(
    State(state): State<AppState>,
    HelmetId(id): HelmetId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.helmet_service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "motorcycle helmet successfully deleted".to_string(),
    }))
}
