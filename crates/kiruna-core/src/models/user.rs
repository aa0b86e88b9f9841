use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Access-level tag used for route-level authorization gating.
///
/// Flat membership checks only; there is no role hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Planner,
    Developer,
    Visitor,
    Resident,
}

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    pub name: String,

    pub surname: String,

    /// Unique login email
    pub email: String,

    /// Salted password digest; never serialized into API responses
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub phone: Option<String>,

    pub role: Role,
}

/// Payload for registering a user. `password` is the clear text received at
/// the boundary; it is hashed before persistence.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: Role,
}
