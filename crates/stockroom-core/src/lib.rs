//! # Stockroom Core
//!
//! Core library for Stockroom - a role-gated inventory console over SQLite.
//!
//! This crate provides the domain logic and storage, independent of the
//! CLI interface.
//!
//! ## Architecture
//!
//! - **auth**: roles, the capability table, password hashing, sessions
//! - **store**: schema management, catalog CRUD, credential store, and the
//!   stock ledger (the atomic quantity-update + history-append pair)
//!
//! Product quantities are mutated only through the stock ledger, which
//! pairs every change with an append-only history row inside a single
//! transaction.

pub mod auth;
pub mod error;
pub mod store;

pub use error::{Result, StockroomError};
pub use store::SqliteStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
