//! Route handlers organized by resource

pub mod products;
pub mod root;
