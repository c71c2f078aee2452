//! Startup configuration.
//!
//! The database path and the non-interactive password both come from the
//! environment (or the matching CLI flag) and are read once at startup; a
//! missing database path is a fatal error.

use std::path::PathBuf;

use crate::cli::Cli;

/// Environment variable naming the database path.
pub const DB_ENV: &str = "STOCKROOM_DB";

/// Environment variable carrying the login password for non-interactive use.
pub const PASSWORD_ENV: &str = "STOCKROOM_PASSWORD";

/// Environment variable carrying the password for an account being
/// created (bootstrap admin or `user create`), kept separate from the
/// login password so one invocation can use both.
pub const NEW_PASSWORD_ENV: &str = "STOCKROOM_NEW_PASSWORD";

/// Resolve the database path from `--db` or the environment.
pub fn database_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    match cli.db {
        Some(ref value) if !value.trim().is_empty() => Ok(PathBuf::from(value)),
        _ => Err(anyhow::anyhow!(
            "No database path provided. Use --db or set {}.",
            DB_ENV
        )),
    }
}

/// Login password supplied via the environment, if any.
pub fn password_from_env() -> Option<String> {
    std::env::var(PASSWORD_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// New-account password supplied via the environment, if any.
pub fn new_password_from_env() -> Option<String> {
    std::env::var(NEW_PASSWORD_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_database_path_from_flag() {
        let cli = Cli::try_parse_from(["stockroom", "--db", "/tmp/stock.db", "shell"])
            .expect("cli should parse");
        let path = database_path(&cli).expect("path should resolve");
        assert_eq!(path, PathBuf::from("/tmp/stock.db"));
    }

    #[test]
    fn test_missing_database_path_is_fatal() {
        // Parse without the flag; ignore any ambient STOCKROOM_DB by
        // overriding with an empty value, which counts as absent.
        let cli = Cli::try_parse_from(["stockroom", "--db", "", "shell"])
            .expect("cli should parse");
        let result = database_path(&cli);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(DB_ENV));
    }
}
