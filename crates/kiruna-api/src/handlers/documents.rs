use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kiruna_auth::authorize;
use kiruna_core::error::KirunaError;
use kiruna_core::models::{Document, DocumentId, NewDocument, Role};
use uuid::Uuid;

use crate::dto::{ConnectRequest, StatusResponse};
use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

pub async fn create_document(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(new): Json<NewDocument>,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    authorize(&user, &[Role::Planner, Role::Developer])?;

    // The referenced coordinate must exist before the document is written.
    let coordinate = new.coordinate;
    state
        .coordinates
        .get_coordinate(coordinate)
        .await?
        .ok_or_else(|| KirunaError::position_not_found(coordinate))?;

    let document = state.documents.create_document(new).await?;

    tracing::info!(id = %document.id, title = %document.title, "Created document");
    Ok((StatusCode::CREATED, Json(document)))
}

pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, ApiError> {
    let id = DocumentId(id);
    let document = state
        .documents
        .get_document(id)
        .await?
        .ok_or(KirunaError::NotFound { entity: "document", id: id.to_string() })?;
    Ok(Json(document))
}

pub async fn list_documents(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let documents = state.documents.list_documents().await?;
    Ok(Json(documents))
}

pub async fn connect_documents(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<ConnectRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    authorize(&user, &[Role::Planner, Role::Developer])?;

    let from = DocumentId(id);
    state.documents.connect_documents(from, request.to).await?;

    tracing::info!(from = %from, to = %request.to, "Connected documents");
    Ok(Json(StatusResponse::success("Documents connected")))
}
