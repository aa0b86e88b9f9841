use kiruna_core::error::Result;
use kiruna_store::ports::DocumentStore;
use std::collections::BTreeSet;

use crate::models::{DocumentGraph, GraphEdge, GraphNode};

/// Graph construction service over the document store.
///
/// Single-shot and request-scoped: each `build` reads the whole corpus and
/// derives the graph from scratch. No pagination and no caching; the corpus
/// is a single municipality's planning documents, small enough that a full
/// snapshot per request is the accepted trade-off. Store failures propagate
/// unchanged, with no retries.
pub struct GraphBuilder<D>
where
    D: DocumentStore,
{
    document_store: D,
}

impl<D> GraphBuilder<D>
where
    D: DocumentStore,
{
    /// Create a new graph builder
    pub fn new(document_store: D) -> Self {
        Self { document_store }
    }

    /// Build the node/edge view over all documents and their connections.
    ///
    /// Edges are deduplicated by unordered id pair: a connection recorded on
    /// both documents of a symmetric pair produces exactly one edge. Output
    /// ordering is deterministic (nodes by id, edges by canonical pair).
    pub async fn build(&self) -> Result<DocumentGraph> {
        let documents = self.document_store.list_documents().await?;

        let mut nodes: Vec<GraphNode> = documents
            .iter()
            .map(|d| GraphNode {
                id: d.id,
                title: d.title.clone(),
                doc_type: d.doc_type,
                coordinate: d.coordinate,
            })
            .collect();
        nodes.sort_by_key(|n| n.id);

        let mut edges = BTreeSet::new();
        for document in &documents {
            for connected in &document.connections {
                edges.insert(GraphEdge::between(document.id, *connected));
            }
        }
        let edges: Vec<GraphEdge> = edges.into_iter().collect();

        tracing::debug!(nodes = nodes.len(), edges = edges.len(), "Built document graph");
        Ok(DocumentGraph { nodes, edges })
    }
}
