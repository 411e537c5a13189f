use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use greeter_core::types::{GREETING_PATH, HEALTH_PATH};

use crate::handlers;

/// Create the application router with both routes.
///
/// Unmatched paths fall through to axum's 404, and other methods on the known
/// paths get its 405.
pub fn create_router() -> Router {
    Router::new()
        .route(GREETING_PATH, get(handlers::greeting))
        .route(HEALTH_PATH, get(handlers::health))
        .layer(TraceLayer::new_for_http())
}
