use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        defeito::{DefeitoFilter, DefeitoInput, BASE_PATH},
        page::PageQuery,
    },
    service::defeito::DefeitoService,
    state::AppState,
};

/// List catalog defects, optionally filtered by `nome` (substring).
pub async fn list_defeitos(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filter): Query<DefeitoFilter>,
) -> Result<impl IntoResponse, AppError> {
    let response = DefeitoService::new(&state.db)
        .get_paginated(filter, page.into())
        .await?;

    Ok(Json(response))
}

pub async fn get_defeito_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dto = DefeitoService::new(&state.db).get_by_id(id).await?;

    Ok(Json(dto))
}

pub async fn create_defeito(
    State(state): State<AppState>,
    Json(payload): Json<DefeitoInput>,
) -> Result<impl IntoResponse, AppError> {
    let dto = DefeitoService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{BASE_PATH}/{}", dto.id_defeito))],
        Json(dto),
    ))
}

pub async fn update_defeito(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<DefeitoInput>,
) -> Result<impl IntoResponse, AppError> {
    DefeitoService::new(&state.db).update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_defeito(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    DefeitoService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
