use axum::Json;

use greeter_core::HealthStatus;

/// Health check endpoint.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
