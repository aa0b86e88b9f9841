use kiruna_core::models::{CoordinateId, DocumentId, DocumentType};
use serde::{Deserialize, Serialize};

/// A document rendered as a graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: DocumentId,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub coordinate: CoordinateId,
}

/// An undirected connection between two documents.
///
/// Edges are deduplicated by unordered pair, so a symmetric record on both
/// sides yields a single edge. `from` is always the smaller id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: DocumentId,
    pub to: DocumentId,
}

impl GraphEdge {
    /// Normalize an id pair into its canonical edge
    pub fn between(a: DocumentId, b: DocumentId) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }
}

/// Derived node/edge view over the document corpus
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}
