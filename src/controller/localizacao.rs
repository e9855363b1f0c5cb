use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        localizacao::{LocalizacaoFilter, LocalizacaoInput, BASE_PATH},
        page::PageQuery,
    },
    service::localizacao::LocalizacaoService,
    state::AppState,
};

/// List location samples, optionally filtered by `motoId` and `setorId`.
pub async fn list_localizacoes(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filter): Query<LocalizacaoFilter>,
) -> Result<impl IntoResponse, AppError> {
    let response = LocalizacaoService::new(&state.db)
        .get_paginated(filter, page.into())
        .await?;

    Ok(Json(response))
}

pub async fn get_localizacao_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dto = LocalizacaoService::new(&state.db).get_by_id(id).await?;

    Ok(Json(dto))
}

/// Record a location sample. The motorcycle and sector must exist.
pub async fn create_localizacao(
    State(state): State<AppState>,
    Json(payload): Json<LocalizacaoInput>,
) -> Result<impl IntoResponse, AppError> {
    let dto = LocalizacaoService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("{BASE_PATH}/{}", dto.id_localizacao),
        )],
        Json(dto),
    ))
}

pub async fn update_localizacao(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<LocalizacaoInput>,
) -> Result<impl IntoResponse, AppError> {
    LocalizacaoService::new(&state.db).update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_localizacao(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    LocalizacaoService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
