use async_trait::async_trait;
use kiruna_core::error::Result;
use kiruna_core::models::{
    Coordinate, CoordinateId, Document, DocumentId, Geometry, Media, MediaId, NewDocument, User,
    UserId,
};
use std::sync::Arc;

/// Port for coordinate storage operations
#[async_trait]
pub trait CoordinateStore: Send + Sync {
    /// Persist a validated geometry under a fresh id
    async fn create_coordinate(&self, geometry: Geometry, name: String) -> Result<Coordinate>;

    /// Retrieve a coordinate by id
    async fn get_coordinate(&self, id: CoordinateId) -> Result<Option<Coordinate>>;

    /// List all coordinates
    async fn list_coordinates(&self) -> Result<Vec<Coordinate>>;
}

/// Port for document storage operations
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a new document with no connections
    async fn create_document(&self, new: NewDocument) -> Result<Document>;

    /// Retrieve a document by id
    async fn get_document(&self, id: DocumentId) -> Result<Option<Document>>;

    /// List the full document corpus
    async fn list_documents(&self) -> Result<Vec<Document>>;

    /// Record a connection between two documents.
    ///
    /// Storage is symmetric: the id is recorded on both sides. Connecting an
    /// already linked pair is a no-op; connecting a document to itself or to
    /// an absent id is an error.
    async fn connect_documents(&self, a: DocumentId, b: DocumentId) -> Result<()>;
}

/// Port for uploaded-file metadata storage
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist media metadata
    async fn store_media(&self, media: &Media) -> Result<()>;

    /// Retrieve media metadata by id
    async fn get_media(&self, id: MediaId) -> Result<Option<Media>>;

    /// Replace an existing media record
    async fn update_media(&self, media: &Media) -> Result<()>;

    /// List media uploaded by a user
    async fn list_media_for_user(&self, user_id: UserId) -> Result<Vec<Media>>;
}

/// Port for user identity storage
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user; duplicate email is a conflict
    async fn create_user(&self, user: User) -> Result<User>;

    /// Retrieve a user by id
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Look a user up by login email (case-insensitive)
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// List all users
    async fn list_users(&self) -> Result<Vec<User>>;
}

// Shared handles satisfy the ports too, so services generic over a port can
// run against the trait objects held in application state.
#[async_trait]
impl<T> DocumentStore for Arc<T>
where
    T: DocumentStore + ?Sized,
{
    async fn create_document(&self, new: NewDocument) -> Result<Document> {
        (**self).create_document(new).await
    }

    async fn get_document(&self, id: DocumentId) -> Result<Option<Document>> {
        (**self).get_document(id).await
    }

    async fn list_documents(&self) -> Result<Vec<Document>> {
        (**self).list_documents().await
    }

    async fn connect_documents(&self, a: DocumentId, b: DocumentId) -> Result<()> {
        (**self).connect_documents(a, b).await
    }
}
