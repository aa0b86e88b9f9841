use kiruna_core::models::Role;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential presented (no auth cookie on the request)
    #[error("Authentication required")]
    MissingCredential,

    /// Credential present but tampered, malformed, or expired
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// Credential verified but its user no longer exists
    #[error("Unknown user")]
    UnknownUser,

    /// Authenticated user's role is not in the route's allowed set
    #[error("Role {role:?} is not permitted for this operation")]
    Forbidden { role: Role },
}
