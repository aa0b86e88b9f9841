use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kiruna_auth::authorize;
use kiruna_core::error::KirunaError;
use kiruna_core::models::{Coordinate, CoordinateId, CoordinateInput, Role};
use uuid::Uuid;

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

pub async fn create_coordinate(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CoordinateInput>,
) -> Result<(StatusCode, Json<Coordinate>), ApiError> {
    authorize(&user, &[Role::Planner, Role::Developer])?;

    // Validation precedes the write; an invalid payload never reaches the store.
    let (geometry, name) = input
        .validate()
        .map_err(|errors| KirunaError::InvalidInput { errors })?;

    let coordinate = state.coordinates.create_coordinate(geometry, name).await?;

    tracing::info!(id = %coordinate.id, name = %coordinate.name, "Created coordinate");
    Ok((StatusCode::CREATED, Json(coordinate)))
}

pub async fn get_coordinate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Coordinate>, ApiError> {
    let id = CoordinateId(id);
    let coordinate = state
        .coordinates
        .get_coordinate(id)
        .await?
        .ok_or_else(|| KirunaError::position_not_found(id))?;
    Ok(Json(coordinate))
}

pub async fn list_coordinates(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Coordinate>>, ApiError> {
    let coordinates = state.coordinates.list_coordinates().await?;
    Ok(Json(coordinates))
}
