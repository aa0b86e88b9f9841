use kiruna_core::models::DocumentId;
use serde::Deserialize;

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for recording a document connection
#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    pub to: DocumentId,
}

/// Body for updating media metadata
#[derive(Debug, Deserialize)]
pub struct UpdateMediaRequest {
    pub filename: String,
}
