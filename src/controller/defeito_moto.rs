use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        defeito_moto::{DefeitoMotoFilter, DefeitoMotoInput, BASE_PATH},
        page::PageQuery,
    },
    service::defeito_moto::DefeitoMotoService,
    state::AppState,
};

/// List defect reports, optionally filtered by `motoId` and `defeitoId`.
pub async fn list_defeitos_moto(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filter): Query<DefeitoMotoFilter>,
) -> Result<impl IntoResponse, AppError> {
    let response = DefeitoMotoService::new(&state.db)
        .get_paginated(filter, page.into())
        .await?;

    Ok(Json(response))
}

pub async fn get_defeito_moto_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dto = DefeitoMotoService::new(&state.db).get_by_id(id).await?;

    Ok(Json(dto))
}

/// Record a defect against a motorcycle. Both references must exist.
pub async fn create_defeito_moto(
    State(state): State<AppState>,
    Json(payload): Json<DefeitoMotoInput>,
) -> Result<impl IntoResponse, AppError> {
    let dto = DefeitoMotoService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("{BASE_PATH}/{}", dto.id_defeito_moto),
        )],
        Json(dto),
    ))
}

pub async fn update_defeito_moto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<DefeitoMotoInput>,
) -> Result<impl IntoResponse, AppError> {
    DefeitoMotoService::new(&state.db).update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_defeito_moto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    DefeitoMotoService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
