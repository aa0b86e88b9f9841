//! Kiruna Core - Domain models and validation
//!
//! This crate contains the domain entities of the Kiruna Explorer backend:
//! coordinates (with geometry validation), documents, media metadata, and
//! users, together with the shared error type.

pub mod error;
pub mod models;

pub use error::{KirunaError, Result};
