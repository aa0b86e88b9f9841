use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use kiruna_core::error::KirunaError;
use kiruna_core::models::{Media, MediaId};
use uuid::Uuid;

use crate::dto::UpdateMediaRequest;
use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

pub async fn upload_media(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Media>), ApiError> {
    let mut upload: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request("Failed to parse multipart form").with_details(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let mimetype = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request("Failed to read file data").with_details(e.to_string()))?;

        upload = Some((filename, mimetype, data.to_vec()));
        break;
    }

    let Some((filename, mimetype, data)) = upload else {
        return Err(ApiError::bad_request("No file provided")
            .with_details("Expected a 'file' field in the multipart form"));
    };

    // The CDN takes the bytes first; a failed handoff leaves no metadata behind.
    let url = state.cdn.store(&filename, &mimetype, &data).await?;

    let media = Media {
        id: MediaId::new(),
        filename,
        size: data.len() as u64,
        mimetype,
        url,
        user_id: user.id,
        uploaded_at: Utc::now(),
    };
    state.media.store_media(&media).await?;

    tracing::info!(id = %media.id, filename = %media.filename, size = media.size, "Stored media");
    Ok((StatusCode::CREATED, Json(media)))
}

pub async fn update_media(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMediaRequest>,
) -> Result<Json<Media>, ApiError> {
    let id = MediaId(id);
    let mut media = state
        .media
        .get_media(id)
        .await?
        .ok_or(KirunaError::NotFound { entity: "media", id: id.to_string() })?;

    if media.user_id != user.id {
        return Err(ApiError::forbidden("Media belongs to another user"));
    }

    media.filename = request.filename;
    state.media.update_media(&media).await?;

    Ok(Json(media))
}
