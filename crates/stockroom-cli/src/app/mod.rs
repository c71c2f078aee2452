//! Application wiring for the Stockroom CLI.

mod context;

pub use context::AppContext;
