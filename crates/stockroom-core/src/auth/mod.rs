//! Authentication and authorization.
//!
//! - **role**: the closed set of user roles
//! - **access**: the operation/role capability table
//! - **password**: Argon2 hashing and verification
//! - **session**: the authenticated-user context passed to operations

pub mod access;
pub mod password;
pub mod role;
pub mod session;

pub use access::{allowed_roles, is_allowed, Operation};
pub use role::Role;
pub use session::Session;
