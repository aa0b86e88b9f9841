use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kiruna_auth::AuthError;
use kiruna_core::error::{KirunaError, ValidationError};
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
    pub errors: Vec<ValidationError>,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
            errors: Vec::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ValidationError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            details: self.details,
            errors: self.errors,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Domain errors map to specific statuses; controllers must never flatten a
/// specific error into a generic 500.
impl From<KirunaError> for ApiError {
    fn from(err: KirunaError) -> Self {
        match err {
            KirunaError::InvalidInput { errors } => Self {
                errors,
                ..Self::bad_request("Invalid input")
            },
            KirunaError::NotFound { entity, ref id } => {
                Self::not_found(format!("{entity} not found")).with_details(id.clone())
            }
            KirunaError::Conflict { .. } => {
                Self::new(StatusCode::CONFLICT, "Conflict").with_details(err.to_string())
            }
            KirunaError::Storage(_) | KirunaError::Serialization(_) => {
                Self::internal("Storage failure").with_details(err.to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match &err {
            AuthError::MissingCredential | AuthError::UnknownUser => {
                Self::unauthenticated("Authentication required")
            }
            AuthError::InvalidCredential(_) => {
                Self::bad_request("Invalid credential").with_details(err.to_string())
            }
            AuthError::Forbidden { .. } => {
                Self::forbidden("Insufficient role").with_details(err.to_string())
            }
        }
    }
}
