//! storefront-server: HTTP backend for the storefront
//!
//! Serves a health acknowledgment and the product catalogue straight
//! out of the `products` table.

pub mod config;
pub mod db;
pub mod http;

pub use config::{DatabaseConfig, ServerConfig};
pub use db::{create_lazy_pool, create_pool};
pub use http::{build_router, run_server, ApiError, ServerError};
