//! Persistent store: schema, catalog, credentials and the stock ledger.

mod row;
mod sqlite;
pub mod types;
pub mod validation;

pub use sqlite::SqliteStore;
pub use types::{
    Category, HistoryEntry, MovementKind, MovementReceipt, MovementRecord, NewUser, Product,
    ProductWithCategory, User,
};
