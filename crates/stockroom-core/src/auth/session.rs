//! Authenticated session.
//!
//! The logged-in user is carried as an explicit value passed to each
//! operation rather than process-wide state, which keeps authorization
//! checks pure and lets tests build sessions directly.

use crate::error::{Result, StockroomError};
use crate::store::types::User;

use super::access::{is_allowed, Operation};
use super::role::Role;

/// An authenticated user for the duration of one session.
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
}

impl Session {
    /// Wrap a user returned by a successful login.
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    /// Whether this session's role may invoke the operation.
    pub fn can(&self, op: Operation) -> bool {
        is_allowed(Some(self.user.role), op)
    }

    /// Gate an operation on this session's role.
    ///
    /// Returns `AccessDenied` when the role is not in the operation's
    /// allowed set.
    pub fn authorize(&self, op: Operation) -> Result<()> {
        if self.can(op) {
            Ok(())
        } else {
            Err(StockroomError::AccessDenied)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn session_with_role(role: Role) -> Session {
        Session::new(User {
            id: 1,
            username: "test".to_string(),
            email: "test@example.com".to_string(),
            password_hash: String::new(),
            role,
            created_at: Utc::now(),
        })
    }

    #[test]
    fn test_authorize_allows_permitted_operation() {
        let session = session_with_role(Role::Manager);
        assert!(session.authorize(Operation::AdjustStock).is_ok());
    }

    #[test]
    fn test_authorize_denies_forbidden_operation() {
        let session = session_with_role(Role::Observer);
        let result = session.authorize(Operation::AdjustStock);
        assert!(matches!(result, Err(StockroomError::AccessDenied)));
    }
}
