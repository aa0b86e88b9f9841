mod request;
mod response;

pub use request::{ConnectRequest, LoginRequest, UpdateMediaRequest};
pub use response::{HealthResponse, StatusResponse};
