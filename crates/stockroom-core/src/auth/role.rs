//! User roles.
//!
//! Roles form a closed set; there is no ad-hoc string comparison anywhere
//! else in the codebase. The database stores the lowercase text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StockroomError;

/// Access level of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including catalog and account management
    Admin,
    /// Stock movements and the movement ledger
    Manager,
    /// Read-only access to the catalog
    Observer,
}

impl Role {
    /// All roles, in descending order of privilege.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Observer];

    /// Text form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Observer => "observer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = StockroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "observer" => Ok(Role::Observer),
            other => Err(StockroomError::Validation(format!(
                "Unknown role: {} (use admin, manager or observer)",
                other
            ))),
        }
    }
}
