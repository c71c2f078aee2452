//! Core data types for the store layer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::Role;
use crate::error::StockroomError;

/// A named grouping for products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A trackable inventory item with a running quantity.
///
/// `quantity` is mutated only through [`SqliteStore::adjust_stock`]; it may
/// go negative, there is no floor.
///
/// [`SqliteStore::adjust_stock`]: crate::store::SqliteStore::adjust_stock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub category_id: i64,
}

/// A product joined with its category name, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductWithCategory {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub category: String,
}

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementKind {
    /// Stock added
    Entry,
    /// Stock removed
    Exit,
}

impl MovementKind {
    /// Text form stored in the history table.
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Entry => "ENTRY",
            MovementKind::Exit => "EXIT",
        }
    }

    /// Apply this movement's sign to a positive magnitude.
    pub fn signed(&self, magnitude: i64) -> i64 {
        match self {
            MovementKind::Entry => magnitude,
            MovementKind::Exit => -magnitude,
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementKind {
    type Err = StockroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENTRY" => Ok(MovementKind::Entry),
            "EXIT" => Ok(MovementKind::Exit),
            other => Err(StockroomError::Storage(format!(
                "Unknown movement type in history: {}",
                other
            ))),
        }
    }
}

/// One immutable record of a stock movement.
///
/// `quantity` is the positive magnitude of the movement; the sign lives in
/// `kind`. Rows are append-only, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub kind: MovementKind,
    pub recorded_at: DateTime<Utc>,
}

/// A history row joined with its product name, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementRecord {
    pub product_id: i64,
    pub product: String,
    pub quantity: i64,
    pub kind: MovementKind,
    pub recorded_at: DateTime<Utc>,
}

/// Result of one successful stock adjustment.
#[derive(Debug, Clone, Serialize)]
pub struct MovementReceipt {
    pub product_id: i64,
    pub quantity: i64,
    pub kind: MovementKind,
    pub new_quantity: i64,
    pub recorded_at: DateTime<Utc>,
}

/// A user account.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string; never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Builder for creating user accounts.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    /// Plaintext; hashed by the store on insert
    pub password: String,
    pub role: Role,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_kind_round_trip() {
        assert_eq!("ENTRY".parse::<MovementKind>().unwrap(), MovementKind::Entry);
        assert_eq!("EXIT".parse::<MovementKind>().unwrap(), MovementKind::Exit);
        assert!("entry".parse::<MovementKind>().is_err());
    }

    #[test]
    fn test_movement_kind_sign() {
        assert_eq!(MovementKind::Entry.signed(5), 5);
        assert_eq!(MovementKind::Exit.signed(5), -5);
    }

    #[test]
    fn test_new_user_builder() {
        let user = NewUser::new("alice", "alice@example.com", "hunter2hunter2", Role::Manager);
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, Role::Manager);
    }
}
