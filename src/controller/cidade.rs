use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        cidade::{CidadeFilter, CidadeInput, BASE_PATH},
        page::PageQuery,
    },
    service::cidade::CidadeService,
    state::AppState,
};

/// List cities, optionally filtered by `nome` (substring) and `estadoId`.
pub async fn list_cidades(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filter): Query<CidadeFilter>,
) -> Result<impl IntoResponse, AppError> {
    let response = CidadeService::new(&state.db)
        .get_paginated(filter, page.into())
        .await?;

    Ok(Json(response))
}

pub async fn get_cidade_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dto = CidadeService::new(&state.db).get_by_id(id).await?;

    Ok(Json(dto))
}

/// Create a city linked to an existing state.
pub async fn create_cidade(
    State(state): State<AppState>,
    Json(payload): Json<CidadeInput>,
) -> Result<impl IntoResponse, AppError> {
    let dto = CidadeService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{BASE_PATH}/{}", dto.id_cidade))],
        Json(dto),
    ))
}

pub async fn update_cidade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CidadeInput>,
) -> Result<impl IntoResponse, AppError> {
    CidadeService::new(&state.db).update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_cidade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CidadeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
