//! # Gigboard Shared Library
//!
//! Storage layer for the Gigboard API: connection pooling, schema migrations,
//! the user/order/offer models and the startup seed loader.
//!
//! ## Module Organization
//!
//! - `db`: SQLite pool and embedded migrations
//! - `models`: database models and their CRUD operations
//! - `seed`: fixture loading at startup

pub mod db;
pub mod models;
pub mod seed;

/// Current version of the Gigboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
