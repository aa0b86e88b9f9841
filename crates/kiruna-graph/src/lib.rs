//! Kiruna Graph - Document-relationship graph construction
//!
//! Builds the node/edge view over the document corpus that the frontend
//! renders as a relationship diagram. The graph is derived, request-scoped
//! state: rebuilt from a full store snapshot on every call and never cached.

pub mod builder;
pub mod models;

pub use builder::GraphBuilder;
pub use models::{DocumentGraph, GraphEdge, GraphNode};
