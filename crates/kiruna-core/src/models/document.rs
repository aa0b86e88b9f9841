use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CoordinateId;

/// Unique identifier for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Fixed classification of planning documents.
///
/// Wire names match the frontend icon set, including the slash in
/// `Conflict/Competition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Agreement,
    #[serde(rename = "Conflict/Competition")]
    ConflictCompetition,
    Consultation,
    #[serde(rename = "Design document")]
    DesignDocument,
    #[serde(rename = "Informative document")]
    InformativeDocument,
    #[serde(rename = "Material effects")]
    MaterialEffects,
    #[serde(rename = "Prescriptive document")]
    PrescriptiveDocument,
    #[serde(rename = "Technical document")]
    TechnicalDocument,
    Forecast,
}

/// A planning document anchored to a coordinate on the map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier
    pub id: DocumentId,

    /// Document title
    pub title: String,

    /// Involved stakeholders
    pub stakeholders: Vec<String>,

    /// Scale notation, e.g. "1:8000" or "Text"
    pub scale: String,

    /// Document classification
    #[serde(rename = "type")]
    pub doc_type: DocumentType,

    /// Original language, if recorded
    pub language: Option<String>,

    /// Page count, if recorded
    pub pages: Option<u32>,

    /// The coordinate this document is anchored to
    pub coordinate: CoordinateId,

    /// Short description
    pub summary: String,

    /// Connected documents. Connections are stored symmetrically: linking
    /// A to B records the id on both sides.
    pub connections: Vec<DocumentId>,

    /// When the document was created
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a document
#[derive(Debug, Clone, Deserialize)]
pub struct NewDocument {
    pub title: String,
    pub stakeholders: Vec<String>,
    pub scale: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub language: Option<String>,
    pub pages: Option<u32>,
    pub coordinate: CoordinateId,
    pub summary: String,
}
