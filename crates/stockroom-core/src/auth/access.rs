//! Role-based access control.
//!
//! A single static capability table maps each operation to the roles that
//! may invoke it. `is_allowed` is a pure function; it performs no I/O and
//! holds no session state, so the full role/operation matrix is testable
//! in isolation.

use super::role::Role;

/// Operations gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Create a category (admin)
    AddCategory,
    /// Create a product (admin)
    AddProduct,
    /// Record a stock entry or exit (admin, manager)
    AdjustStock,
    /// View categories and products (any authenticated role)
    ViewCatalog,
    /// View the movement ledger (admin, manager)
    ViewHistory,
    /// Create or list user accounts (admin)
    ManageUsers,
}

/// Roles permitted to invoke an operation.
pub fn allowed_roles(op: Operation) -> &'static [Role] {
    match op {
        Operation::AddCategory | Operation::AddProduct | Operation::ManageUsers => &[Role::Admin],
        Operation::AdjustStock | Operation::ViewHistory => &[Role::Admin, Role::Manager],
        Operation::ViewCatalog => &[Role::Admin, Role::Manager, Role::Observer],
    }
}

/// Whether a (possibly absent) role may invoke an operation.
///
/// `None` means no user is logged in and is always denied.
pub fn is_allowed(role: Option<Role>, op: Operation) -> bool {
    match role {
        None => false,
        Some(role) => allowed_roles(op).contains(&role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_OPERATIONS: [Operation; 6] = [
        Operation::AddCategory,
        Operation::AddProduct,
        Operation::AdjustStock,
        Operation::ViewCatalog,
        Operation::ViewHistory,
        Operation::ManageUsers,
    ];

    #[test]
    fn test_unauthenticated_is_always_denied() {
        for op in ALL_OPERATIONS {
            assert!(!is_allowed(None, op));
        }
    }

    #[test]
    fn test_admin_may_do_everything() {
        for op in ALL_OPERATIONS {
            assert!(is_allowed(Some(Role::Admin), op));
        }
    }

    #[test]
    fn test_manager_matrix() {
        let role = Some(Role::Manager);
        assert!(!is_allowed(role, Operation::AddCategory));
        assert!(!is_allowed(role, Operation::AddProduct));
        assert!(is_allowed(role, Operation::AdjustStock));
        assert!(is_allowed(role, Operation::ViewCatalog));
        assert!(is_allowed(role, Operation::ViewHistory));
        assert!(!is_allowed(role, Operation::ManageUsers));
    }

    #[test]
    fn test_observer_matrix() {
        let role = Some(Role::Observer);
        assert!(!is_allowed(role, Operation::AddCategory));
        assert!(!is_allowed(role, Operation::AddProduct));
        assert!(!is_allowed(role, Operation::AdjustStock));
        assert!(is_allowed(role, Operation::ViewCatalog));
        assert!(!is_allowed(role, Operation::ViewHistory));
        assert!(!is_allowed(role, Operation::ManageUsers));
    }
}
