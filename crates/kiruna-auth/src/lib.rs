//! Kiruna Auth - Token verification, password hashing, and the role gate
//!
//! The signing secret and token lifetime are explicit configuration passed
//! in at construction time; nothing here reads module-level state. Build one
//! [`TokenCodec`] at process start and share it.

pub mod error;
pub mod gate;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use gate::authorize;
pub use token::{AuthConfig, TokenCodec};
