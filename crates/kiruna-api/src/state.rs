use std::sync::Arc;

use kiruna_auth::{AuthConfig, TokenCodec};
use kiruna_store::cdn::ContentDelivery;
use kiruna_store::ports::{CoordinateStore, DocumentStore, MediaStore, UserStore};

/// Shared application state behind every handler
#[derive(Clone)]
pub struct AppState {
    pub coordinates: Arc<dyn CoordinateStore>,
    pub documents: Arc<dyn DocumentStore>,
    pub media: Arc<dyn MediaStore>,
    pub users: Arc<dyn UserStore>,
    pub cdn: Arc<dyn ContentDelivery>,
    pub tokens: Arc<TokenCodec>,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(
        coordinates: Arc<dyn CoordinateStore>,
        documents: Arc<dyn DocumentStore>,
        media: Arc<dyn MediaStore>,
        users: Arc<dyn UserStore>,
        cdn: Arc<dyn ContentDelivery>,
        auth: AuthConfig,
    ) -> Self {
        Self {
            coordinates,
            documents,
            media,
            users,
            cdn,
            tokens: Arc::new(TokenCodec::new(&auth)),
            auth,
        }
    }
}
