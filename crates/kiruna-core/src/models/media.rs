use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Unique identifier for an uploaded media record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaId(pub Uuid);

impl MediaId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MediaId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Metadata for an uploaded file. The binary content itself lives behind
/// `url`, an externally issued reference treated as opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    /// Unique identifier
    pub id: MediaId,

    /// Original filename
    pub filename: String,

    /// Size in bytes
    pub size: u64,

    /// MIME type as declared by the uploader
    pub mimetype: String,

    /// Externally issued content location
    pub url: String,

    /// The user who uploaded the file
    pub user_id: UserId,

    /// When the file was uploaded
    pub uploaded_at: DateTime<Utc>,
}
