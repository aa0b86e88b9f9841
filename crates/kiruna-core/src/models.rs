pub mod coordinate;
pub mod document;
pub mod media;
pub mod user;

pub use coordinate::{Coordinate, CoordinateId, CoordinateInput, Geometry};
pub use document::{Document, DocumentId, DocumentType, NewDocument};
pub use media::{Media, MediaId};
pub use user::{NewUser, Role, User, UserId};
