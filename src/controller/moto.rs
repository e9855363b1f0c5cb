use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        moto::{MotoFilter, MotoInput, BASE_PATH},
        page::PageQuery,
    },
    service::moto::MotoService,
    state::AppState,
};

/// List motorcycles.
///
/// Returns one page of motorcycles, optionally filtered by `placa`,
/// `modelo`, `status` (substring), and `setorId` (exact). The envelope
/// carries totals and navigation links that preserve the active filters.
///
/// # Returns
/// - `200 OK` - Paginated motorcycle list
/// - `500 Internal Server Error` - Database error
pub async fn list_motos(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Query(filter): Query<MotoFilter>,
) -> Result<impl IntoResponse, AppError> {
    let response = MotoService::new(&state.db)
        .get_paginated(filter, page.into())
        .await?;

    Ok(Json(response))
}

/// Get one motorcycle by id.
///
/// # Returns
/// - `200 OK` - Motorcycle DTO with item links
/// - `404 Not Found` - No motorcycle with the given id
pub async fn get_moto_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dto = MotoService::new(&state.db).get_by_id(id).await?;

    Ok(Json(dto))
}

/// Create a motorcycle.
///
/// # Returns
/// - `201 Created` - Created DTO, with `Location` pointing at the new item
/// - `400 Bad Request` - Referenced sector does not exist
pub async fn create_moto(
    State(state): State<AppState>,
    Json(payload): Json<MotoInput>,
) -> Result<impl IntoResponse, AppError> {
    let dto = MotoService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{BASE_PATH}/{}", dto.id_moto))],
        Json(dto),
    ))
}

/// Update a motorcycle.
///
/// # Returns
/// - `204 No Content` - Update applied
/// - `400 Bad Request` - Changed sector reference does not exist
/// - `404 Not Found` - No motorcycle with the given id
pub async fn update_moto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MotoInput>,
) -> Result<impl IntoResponse, AppError> {
    MotoService::new(&state.db).update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a motorcycle.
///
/// # Returns
/// - `204 No Content` - Motorcycle deleted
/// - `404 Not Found` - No motorcycle with the given id
pub async fn delete_moto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    MotoService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
