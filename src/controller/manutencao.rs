use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        manutencao::{ManutencaoFilter, ManutencaoInput, BASE_PATH},
        page::PageQuery,
    },
    service::manutencao::ManutencaoService,
    state::AppState,
};

/// List maintenance records, optionally filtered by `motoId` and `tipo`
/// (substring).
pub async fn list_manutencoes(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filter): Query<ManutencaoFilter>,
) -> Result<impl IntoResponse, AppError> {
    let response = ManutencaoService::new(&state.db)
        .get_paginated(filter, page.into())
        .await?;

    Ok(Json(response))
}

pub async fn get_manutencao_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dto = ManutencaoService::new(&state.db).get_by_id(id).await?;

    Ok(Json(dto))
}

pub async fn create_manutencao(
    State(state): State<AppState>,
    Json(payload): Json<ManutencaoInput>,
) -> Result<impl IntoResponse, AppError> {
    let dto = ManutencaoService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("{BASE_PATH}/{}", dto.id_manutencao),
        )],
        Json(dto),
    ))
}

pub async fn update_manutencao(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ManutencaoInput>,
) -> Result<impl IntoResponse, AppError> {
    ManutencaoService::new(&state.db).update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_manutencao(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ManutencaoService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
