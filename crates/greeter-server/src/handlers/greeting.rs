use axum::Json;

use greeter_core::Greeting;

/// Canned greeting.
pub async fn greeting() -> Json<Greeting> {
    Json(Greeting::new())
}
