//! Kiruna Store - Storage ports and adapters
//!
//! This crate defines the storage ports for coordinates, documents, media
//! metadata, and users, plus the content-delivery port for media binaries,
//! and provides the in-memory adapter implementations.

pub mod cdn;
pub mod memory;
pub mod ports;
