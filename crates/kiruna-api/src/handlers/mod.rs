mod coordinates;
mod documents;
mod graph;
mod health;
mod media;
mod sessions;
mod users;

pub use coordinates::{create_coordinate, get_coordinate, list_coordinates};
pub use documents::{connect_documents, create_document, get_document, list_documents};
pub use graph::get_graph;
pub use health::health_check;
pub use media::{update_media, upload_media};
pub use sessions::{login, logout};
pub use users::{list_users, register_user};
