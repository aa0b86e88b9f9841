use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Coordinates
        .route("/api/v1/coordinates", post(handlers::create_coordinate))
        .route("/api/v1/coordinates", get(handlers::list_coordinates))
        .route("/api/v1/coordinates/{id}", get(handlers::get_coordinate))

        // Documents
        .route("/api/v1/documents", post(handlers::create_document))
        .route("/api/v1/documents", get(handlers::list_documents))
        .route("/api/v1/documents/{id}", get(handlers::get_document))
        .route("/api/v1/documents/{id}/connections", post(handlers::connect_documents))

        // Relationship graph
        .route("/api/v1/graph", get(handlers::get_graph))

        // Media
        .route("/api/v1/media", post(handlers::upload_media))
        .route("/api/v1/media/{id}", put(handlers::update_media))

        // Users and sessions
        .route("/api/v1/users", post(handlers::register_user))
        .route("/api/v1/users", get(handlers::list_users))
        .route("/api/v1/sessions", post(handlers::login))
        .route("/api/v1/sessions", delete(handlers::logout))

        .with_state(state)
}
