//! Root acknowledgment endpoint
//!
//! Doubles as the health check: it never touches the database.

use axum::{routing::get, Router};

/// Body returned by `GET /`
pub const ACKNOWLEDGMENT: &str = "Backend is running!";

/// GET /
async fn root() -> &'static str {
    ACKNOWLEDGMENT
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
