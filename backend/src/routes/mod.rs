mod greeting;
mod health;

use axum::{routing::get, Router};

/// Creates the router with all handler routes
#[must_use]
pub fn handler() -> Router {
    Router::new()
        .route("/", get(greeting::handler))
        .route("/health", get(health::handler))
}
