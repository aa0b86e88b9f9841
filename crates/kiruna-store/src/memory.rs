//! In-memory storage implementations.
//!
//! These implementations use `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state. Unique-key enforcement (user email) happens under
//! the write lock, so concurrent registrations cannot both succeed.

use async_trait::async_trait;
use chrono::Utc;
use kiruna_core::error::{KirunaError, Result, ValidationErrorKind};
use kiruna_core::models::{
    Coordinate, CoordinateId, Document, DocumentId, Geometry, Media, MediaId, NewDocument, User,
    UserId,
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::{CoordinateStore, DocumentStore, MediaStore, UserStore};

/// In-memory implementation of CoordinateStore
#[derive(Debug, Clone, Default)]
pub struct MemoryCoordinateStore {
    coordinates: Arc<RwLock<HashMap<CoordinateId, Coordinate>>>,
}

impl MemoryCoordinateStore {
    /// Create a new in-memory coordinate store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CoordinateStore for MemoryCoordinateStore {
    async fn create_coordinate(&self, geometry: Geometry, name: String) -> Result<Coordinate> {
        let coordinate = Coordinate {
            id: CoordinateId::new(),
            geometry,
            name,
            created_at: Utc::now(),
        };

        let mut coordinates = self.coordinates.write().unwrap();
        coordinates.insert(coordinate.id, coordinate.clone());
        Ok(coordinate)
    }

    async fn get_coordinate(&self, id: CoordinateId) -> Result<Option<Coordinate>> {
        let coordinates = self.coordinates.read().unwrap();
        Ok(coordinates.get(&id).cloned())
    }

    async fn list_coordinates(&self) -> Result<Vec<Coordinate>> {
        let coordinates = self.coordinates.read().unwrap();
        let mut all: Vec<Coordinate> = coordinates.values().cloned().collect();
        all.sort_by_key(|c| c.created_at);
        Ok(all)
    }
}

/// In-memory implementation of DocumentStore
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    documents: Arc<RwLock<HashMap<DocumentId, Document>>>,
}

impl MemoryDocumentStore {
    /// Create a new in-memory document store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create_document(&self, new: NewDocument) -> Result<Document> {
        let document = Document {
            id: DocumentId::new(),
            title: new.title,
            stakeholders: new.stakeholders,
            scale: new.scale,
            doc_type: new.doc_type,
            language: new.language,
            pages: new.pages,
            coordinate: new.coordinate,
            summary: new.summary,
            connections: Vec::new(),
            created_at: Utc::now(),
        };

        let mut documents = self.documents.write().unwrap();
        documents.insert(document.id, document.clone());
        Ok(document)
    }

    async fn get_document(&self, id: DocumentId) -> Result<Option<Document>> {
        let documents = self.documents.read().unwrap();
        Ok(documents.get(&id).cloned())
    }

    async fn list_documents(&self) -> Result<Vec<Document>> {
        let documents = self.documents.read().unwrap();
        let mut all: Vec<Document> = documents.values().cloned().collect();
        all.sort_by_key(|d| d.created_at);
        Ok(all)
    }

    async fn connect_documents(&self, a: DocumentId, b: DocumentId) -> Result<()> {
        if a == b {
            return Err(KirunaError::invalid(
                ValidationErrorKind::InvalidField,
                "connections",
                "a document cannot be connected to itself",
            ));
        }

        let mut documents = self.documents.write().unwrap();
        for id in [a, b] {
            if !documents.contains_key(&id) {
                return Err(KirunaError::NotFound { entity: "document", id: id.to_string() });
            }
        }

        // Symmetric storage: record each side on the other, once.
        for (from, to) in [(a, b), (b, a)] {
            let document = documents.get_mut(&from).unwrap();
            if !document.connections.contains(&to) {
                document.connections.push(to);
            }
        }
        Ok(())
    }
}

/// In-memory implementation of MediaStore
#[derive(Debug, Clone, Default)]
pub struct MemoryMediaStore {
    media: Arc<RwLock<HashMap<MediaId, Media>>>,
}

impl MemoryMediaStore {
    /// Create a new in-memory media store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MediaStore for MemoryMediaStore {
    async fn store_media(&self, media: &Media) -> Result<()> {
        let mut store = self.media.write().unwrap();
        store.insert(media.id, media.clone());
        Ok(())
    }

    async fn get_media(&self, id: MediaId) -> Result<Option<Media>> {
        let store = self.media.read().unwrap();
        Ok(store.get(&id).cloned())
    }

    async fn update_media(&self, media: &Media) -> Result<()> {
        let mut store = self.media.write().unwrap();
        if !store.contains_key(&media.id) {
            return Err(KirunaError::NotFound { entity: "media", id: media.id.to_string() });
        }
        store.insert(media.id, media.clone());
        Ok(())
    }

    async fn list_media_for_user(&self, user_id: UserId) -> Result<Vec<Media>> {
        let store = self.media.read().unwrap();
        let mut all: Vec<Media> =
            store.values().filter(|m| m.user_id == user_id).cloned().collect();
        all.sort_by_key(|m| m.uploaded_at);
        Ok(all)
    }
}

/// In-memory implementation of UserStore
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl MemoryUserStore {
    /// Create a new in-memory user store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, user: User) -> Result<User> {
        let mut users = self.users.write().unwrap();

        if users.values().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(KirunaError::Conflict {
                entity: "user",
                key: "email",
                value: user.email,
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let users = self.users.read().unwrap();
        Ok(users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.email.eq_ignore_ascii_case(email)).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let users = self.users.read().unwrap();
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(all)
    }
}
