//! Graph construction over the in-memory document store.

use kiruna_core::models::{CoordinateId, DocumentType, NewDocument};
use kiruna_graph::{DocumentGraph, GraphBuilder};
use kiruna_store::memory::MemoryDocumentStore;
use kiruna_store::ports::DocumentStore;

fn new_document(title: &str) -> NewDocument {
    NewDocument {
        title: title.to_string(),
        stakeholders: vec!["Kiruna kommun".to_string()],
        scale: "1:8000".to_string(),
        doc_type: DocumentType::PrescriptiveDocument,
        language: Some("Swedish".to_string()),
        pages: None,
        coordinate: CoordinateId::new(),
        summary: "summary".to_string(),
    }
}

#[tokio::test]
async fn empty_corpus_builds_empty_graph() {
    let builder = GraphBuilder::new(MemoryDocumentStore::new());
    let DocumentGraph { nodes, edges } = builder.build().await.unwrap();
    assert!(nodes.is_empty());
    assert!(edges.is_empty());
}

#[tokio::test]
async fn symmetric_records_deduplicate_to_one_edge() {
    let store = MemoryDocumentStore::new();
    let a = store.create_document(new_document("Development plan")).await.unwrap();
    let b = store.create_document(new_document("Deformation forecast")).await.unwrap();
    store.create_document(new_document("Unconnected")).await.unwrap();

    // connect() records the pair on both documents; the builder must still
    // emit exactly one edge for it
    store.connect_documents(a.id, b.id).await.unwrap();

    let graph = builder_over(&store).build().await.unwrap();
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges.len(), 1);

    let edge = graph.edges[0];
    assert_eq!(edge.from.min(edge.to), a.id.min(b.id));
    assert_eq!(edge.from.max(edge.to), a.id.max(b.id));
}

#[tokio::test]
async fn repeated_builds_are_deterministic() {
    let store = MemoryDocumentStore::new();
    let a = store.create_document(new_document("a")).await.unwrap();
    let b = store.create_document(new_document("b")).await.unwrap();
    let c = store.create_document(new_document("c")).await.unwrap();
    store.connect_documents(a.id, b.id).await.unwrap();
    store.connect_documents(b.id, c.id).await.unwrap();

    let first = builder_over(&store).build().await.unwrap();
    let second = builder_over(&store).build().await.unwrap();

    assert_eq!(first.nodes, second.nodes);
    assert_eq!(first.edges, second.edges);
    assert_eq!(first.edges.len(), 2);
}

#[tokio::test]
async fn nodes_carry_id_title_type_and_coordinate() {
    let store = MemoryDocumentStore::new();
    let doc = store.create_document(new_document("Mine expansion")).await.unwrap();

    let graph = builder_over(&store).build().await.unwrap();
    let node = &graph.nodes[0];
    assert_eq!(node.id, doc.id);
    assert_eq!(node.title, "Mine expansion");
    assert_eq!(node.doc_type, DocumentType::PrescriptiveDocument);
    assert_eq!(node.coordinate, doc.coordinate);
}

fn builder_over(store: &MemoryDocumentStore) -> GraphBuilder<MemoryDocumentStore> {
    GraphBuilder::new(store.clone())
}
