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
        unidade::{UnidadeFilter, UnidadeInput, BASE_PATH},
    },
    service::unidade::UnidadeService,
    state::AppState,
};

/// List units, optionally filtered by `cidadeId` and `nome` (substring).
pub async fn list_unidades(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filter): Query<UnidadeFilter>,
) -> Result<impl IntoResponse, AppError> {
    let response = UnidadeService::new(&state.db)
        .get_paginated(filter, page.into())
        .await?;

    Ok(Json(response))
}

pub async fn get_unidade_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dto = UnidadeService::new(&state.db).get_by_id(id).await?;

    Ok(Json(dto))
}

/// Create a unit linked to an existing city.
pub async fn create_unidade(
    State(state): State<AppState>,
    Json(payload): Json<UnidadeInput>,
) -> Result<impl IntoResponse, AppError> {
    let dto = UnidadeService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{BASE_PATH}/{}", dto.id_unidade))],
        Json(dto),
    ))
}

pub async fn update_unidade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UnidadeInput>,
) -> Result<impl IntoResponse, AppError> {
    UnidadeService::new(&state.db).update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_unidade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UnidadeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
