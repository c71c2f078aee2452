//! Raw row types for database queries.
//!
//! SQLite stores roles, movement types and timestamps as text; these
//! intermediate rows parse that text into domain types in one place.

use chrono::{DateTime, Utc};

use crate::error::{Result, StockroomError};
use crate::store::types::{MovementRecord, User};

/// Raw row from the users table, before parsing into domain types.
#[derive(Debug)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: String,
}

impl TryFrom<UserRow> for User {
    type Error = StockroomError;

    fn try_from(row: UserRow) -> Result<Self> {
        let role = row
            .role
            .parse()
            .map_err(|_| StockroomError::Storage(format!("Invalid role in users: {}", row.role)))?;
        let created_at = parse_timestamp(&row.created_at)?;

        Ok(User {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password,
            role,
            created_at,
        })
    }
}

/// Raw history row joined with its product name.
#[derive(Debug)]
pub struct MovementRow {
    pub product_id: i64,
    pub product: String,
    pub quantity: i64,
    pub kind: String,
    pub recorded_at: String,
}

impl TryFrom<MovementRow> for MovementRecord {
    type Error = StockroomError;

    fn try_from(row: MovementRow) -> Result<Self> {
        let kind = row.kind.parse()?;
        let recorded_at = parse_timestamp(&row.recorded_at)?;

        Ok(MovementRecord {
            product_id: row.product_id,
            product: row.product,
            quantity: row.quantity,
            kind,
            recorded_at,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| StockroomError::Storage(format!("Invalid timestamp: {}", e)))
}
