use axum::Json;
use serde_json::{json, Value};

/// Greeting returned by `GET /`. Cyrillic on purpose, the client
/// expects it to round-trip as UTF-8.
pub const GREETING: &str = "Привет от beLive Backend!";

/// Root endpoint
///
/// Returns the static greeting message as a one-key JSON object.
#[allow(clippy::unused_async)]
pub async fn handler() -> Json<Value> {
    Json(json!({
        "message": GREETING
    }))
}
