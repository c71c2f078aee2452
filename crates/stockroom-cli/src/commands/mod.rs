//! One handler module per command group.

pub mod categories;
pub mod history;
pub mod init;
pub mod products;
pub mod shell;
pub mod stock;
pub mod users;
