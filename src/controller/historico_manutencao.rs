use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        historico_manutencao::{HistoricoManutencaoFilter, HistoricoManutencaoInput, BASE_PATH},
        page::PageQuery,
    },
    service::historico_manutencao::HistoricoManutencaoService,
    state::AppState,
};

/// List movement history entries, optionally filtered by `motoId`,
/// `setorOrigemId`, and `setorDestinoId`.
pub async fn list_historicos(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filter): Query<HistoricoManutencaoFilter>,
) -> Result<impl IntoResponse, AppError> {
    let response = HistoricoManutencaoService::new(&state.db)
        .get_paginated(filter, page.into())
        .await?;

    Ok(Json(response))
}

pub async fn get_historico_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dto = HistoricoManutencaoService::new(&state.db)
        .get_by_id(id)
        .await?;

    Ok(Json(dto))
}

/// Record a motorcycle transfer between sectors. The motorcycle and both
/// sectors must exist.
pub async fn create_historico(
    State(state): State<AppState>,
    Json(payload): Json<HistoricoManutencaoInput>,
) -> Result<impl IntoResponse, AppError> {
    let dto = HistoricoManutencaoService::new(&state.db)
        .create(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("{BASE_PATH}/{}", dto.id_movimentacao),
        )],
        Json(dto),
    ))
}

pub async fn update_historico(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<HistoricoManutencaoInput>,
) -> Result<impl IntoResponse, AppError> {
    HistoricoManutencaoService::new(&state.db)
        .update(id, payload)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_historico(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    HistoricoManutencaoService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
