//! Error types for the Kiruna Explorer backend

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a single field-level validation failure.
///
/// Callers switch on the kind rather than parse messages; the kind set is
/// closed and serialized verbatim into error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Geometry type tag missing or outside {Point, Polygon}
    InvalidType,
    /// Coordinate payload has the wrong structure for its type tag
    InvalidShape,
    /// A coordinate value is outside latitude/longitude bounds
    InvalidCoordinateRange,
    /// Required name missing or empty
    InvalidName,
    /// Any other required-field or range failure
    InvalidField,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self { kind, field: field.into(), message: message.into() }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Error)]
pub enum KirunaError {
    // Validation errors - rejected before any write
    #[error("Invalid input: {} field error(s)", .errors.len())]
    InvalidInput { errors: Vec<ValidationError> },

    // Lookup errors - the entity name distinguishes "position not found"
    // from a generic storage failure
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    // Unique-key violations (e.g. duplicate user email)
    #[error("{entity} with {key} '{value}' already exists")]
    Conflict {
        entity: &'static str,
        key: &'static str,
        value: String,
    },

    // Underlying persistence unreachable or erroring
    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl KirunaError {
    /// Single-field validation failure
    pub fn invalid(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidInput { errors: vec![ValidationError::new(kind, field, message)] }
    }

    /// Domain-specific "position not found" for coordinate lookups
    pub fn position_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound { entity: "position", id: id.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, KirunaError>;
