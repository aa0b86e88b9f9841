use std::sync::Arc;

use axum::{extract::State, Json};
use kiruna_graph::{DocumentGraph, GraphBuilder};

use crate::error::ApiError;
use crate::state::AppState;

/// Rebuilds the document graph from a full store snapshot on every call.
pub async fn get_graph(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DocumentGraph>, ApiError> {
    let builder = GraphBuilder::new(state.documents.clone());
    let graph = builder.build().await.map_err(|e| {
        tracing::error!(error = %e, "Graph construction failed");
        ApiError::from(e)
    })?;
    Ok(Json(graph))
}
