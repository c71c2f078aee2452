//! Application context for the Stockroom CLI.

use std::path::PathBuf;

use stockroom_core::auth::Session;
use stockroom_core::SqliteStore;

use crate::cli::Cli;
use crate::config;
use crate::prompt;

/// Bundles parsed CLI arguments for handler functions.
///
/// Each call to [`open_store`] opens a fresh connection that is dropped on
/// every exit path of the operation using it.
///
/// [`open_store`]: AppContext::open_store
pub struct AppContext<'a> {
    cli: &'a Cli,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self { cli }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Resolve the database path (fatal when absent).
    pub fn database_path(&self) -> anyhow::Result<PathBuf> {
        config::database_path(self.cli)
    }

    /// Open a fresh store for one logical operation.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        let path = self.database_path()?;
        Ok(SqliteStore::open(&path)?)
    }

    /// The account email from `--email` or the environment.
    pub fn account_email(&self) -> anyhow::Result<&str> {
        self.cli
            .email
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("No account email provided. Use --email or set STOCKROOM_EMAIL.")
            })
    }

    /// Authenticate the one-shot invocation against the store.
    ///
    /// The password comes from the environment or a prompt; a failed login
    /// reports one message for wrong password and unknown email alike.
    pub fn login(&self, store: &SqliteStore) -> anyhow::Result<Session> {
        let email = self.account_email()?;
        let password = prompt::password("Password")?;
        let user = store
            .verify_login(email, &password)?
            .ok_or_else(|| anyhow::anyhow!("Email or password incorrect"))?;
        Ok(Session::new(user))
    }
}
