use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        page::PageQuery,
        rfid::{RfidFilter, RfidInput, BASE_PATH},
    },
    service::rfid::RfidService,
    state::AppState,
};

/// List RFID tags, optionally filtered by `motoId` and `numeroRfid`
/// (substring of the decimal rendering).
pub async fn list_rfids(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filter): Query<RfidFilter>,
) -> Result<impl IntoResponse, AppError> {
    let response = RfidService::new(&state.db)
        .get_paginated(filter, page.into())
        .await?;

    Ok(Json(response))
}

pub async fn get_rfid_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dto = RfidService::new(&state.db).get_by_id(id).await?;

    Ok(Json(dto))
}

/// Register a tag attached to an existing motorcycle.
pub async fn create_rfid(
    State(state): State<AppState>,
    Json(payload): Json<RfidInput>,
) -> Result<impl IntoResponse, AppError> {
    let dto = RfidService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{BASE_PATH}/{}", dto.id_rfid))],
        Json(dto),
    ))
}

pub async fn update_rfid(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<RfidInput>,
) -> Result<impl IntoResponse, AppError> {
    RfidService::new(&state.db).update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_rfid(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    RfidService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
