use axum::Json;

use crate::dto::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
