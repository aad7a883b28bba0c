//! beLive Backend service

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Route handlers
pub mod routes;

/// HTTP server bootstrap
pub mod server;

/// Environment configuration
pub mod types;
