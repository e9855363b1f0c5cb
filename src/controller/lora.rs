use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        lora::{LoraFilter, LoraInput, BASE_PATH},
        page::PageQuery,
    },
    service::lora::LoraService,
    state::AppState,
};

/// List LoRa devices, optionally filtered by `motoId` and `numeroLora`
/// (substring of the decimal rendering).
pub async fn list_loras(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filter): Query<LoraFilter>,
) -> Result<impl IntoResponse, AppError> {
    let response = LoraService::new(&state.db)
        .get_paginated(filter, page.into())
        .await?;

    Ok(Json(response))
}

pub async fn get_lora_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dto = LoraService::new(&state.db).get_by_id(id).await?;

    Ok(Json(dto))
}

/// Register a device, optionally assigned to an existing motorcycle.
pub async fn create_lora(
    State(state): State<AppState>,
    Json(payload): Json<LoraInput>,
) -> Result<impl IntoResponse, AppError> {
    let dto = LoraService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{BASE_PATH}/{}", dto.id_lora))],
        Json(dto),
    ))
}

pub async fn update_lora(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<LoraInput>,
) -> Result<impl IntoResponse, AppError> {
    LoraService::new(&state.db).update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_lora(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    LoraService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
