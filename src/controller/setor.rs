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
        setor::{SetorFilter, SetorInput, BASE_PATH},
    },
    service::setor::SetorService,
    state::AppState,
};

/// List sectors, optionally filtered by `unidadeId` and `nome` (substring).
pub async fn list_setores(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filter): Query<SetorFilter>,
) -> Result<impl IntoResponse, AppError> {
    let response = SetorService::new(&state.db)
        .get_paginated(filter, page.into())
        .await?;

    Ok(Json(response))
}

pub async fn get_setor_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dto = SetorService::new(&state.db).get_by_id(id).await?;

    Ok(Json(dto))
}

/// Create a sector linked to an existing unit.
pub async fn create_setor(
    State(state): State<AppState>,
    Json(payload): Json<SetorInput>,
) -> Result<impl IntoResponse, AppError> {
    let dto = SetorService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{BASE_PATH}/{}", dto.id_setor))],
        Json(dto),
    ))
}

pub async fn update_setor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SetorInput>,
) -> Result<impl IntoResponse, AppError> {
    SetorService::new(&state.db).update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_setor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    SetorService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
