//! Database layer - connection pool and repositories
//!
//! The `products` table is owned elsewhere; this crate only reads it.

pub mod pool;
pub mod repos;

pub use pool::{create_lazy_pool, create_pool};
pub use repos::*;
