use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        estado::{EstadoFilter, EstadoInput, BASE_PATH},
        page::PageQuery,
    },
    service::estado::EstadoService,
    state::AppState,
};

/// List states, optionally filtered by `sigla` (case-insensitive equality).
pub async fn list_estados(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filter): Query<EstadoFilter>,
) -> Result<impl IntoResponse, AppError> {
    let response = EstadoService::new(&state.db)
        .get_paginated(filter, page.into())
        .await?;

    Ok(Json(response))
}

pub async fn get_estado_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dto = EstadoService::new(&state.db).get_by_id(id).await?;

    Ok(Json(dto))
}

pub async fn create_estado(
    State(state): State<AppState>,
    Json(payload): Json<EstadoInput>,
) -> Result<impl IntoResponse, AppError> {
    let dto = EstadoService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{BASE_PATH}/{}", dto.id_estado))],
        Json(dto),
    ))
}

pub async fn update_estado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<EstadoInput>,
) -> Result<impl IntoResponse, AppError> {
    EstadoService::new(&state.db).update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_estado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    EstadoService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
