use std::num::NonZeroU32;

use clap::{Args, Parser, Subcommand};

use stockroom_core::auth::Role;
use stockroom_core::VERSION;

/// Stockroom - a role-gated inventory console
#[derive(Parser)]
#[command(name = "stockroom")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the inventory database
    #[arg(short, long, global = true, env = "STOCKROOM_DB")]
    pub db: Option<String>,

    /// Account email to authenticate as
    #[arg(short, long, global = true, env = "STOCKROOM_EMAIL")]
    pub email: Option<String>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Admin username (skips the prompt)
    #[arg(long)]
    pub username: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for list commands
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stock in` / `stock out` commands
#[derive(Args)]
pub struct MoveArgs {
    /// Product id
    #[arg(value_name = "PRODUCT_ID")]
    pub product: i64,

    /// Quantity to move (positive)
    #[arg(value_name = "QTY")]
    pub quantity: NonZeroU32,
}

#[derive(Subcommand)]
pub enum CategoryCommand {
    /// Add a category (admin)
    Add {
        /// Category name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// List categories
    List(ListArgs),
}

#[derive(Subcommand)]
pub enum ProductCommand {
    /// Add a product under an existing category (admin)
    Add {
        /// Product name
        #[arg(value_name = "NAME")]
        name: String,

        /// Category id
        #[arg(long, value_name = "ID")]
        category: i64,
    },

    /// List products with category and current stock
    List(ListArgs),
}

#[derive(Subcommand)]
pub enum StockCommand {
    /// Record a stock entry (admin, manager)
    In(MoveArgs),

    /// Record a stock exit (admin, manager)
    Out(MoveArgs),
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Create a user account (admin)
    Create {
        /// Username for the new account
        #[arg(value_name = "USERNAME")]
        username: String,

        /// Email for the new account
        #[arg(value_name = "EMAIL")]
        new_email: String,

        /// Role for the new account (admin, manager, observer)
        #[arg(long)]
        role: Role,
    },

    /// List user accounts (admin)
    List(ListArgs),
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database schema and the bootstrap admin account
    Init(InitArgs),

    /// Start an interactive session (login, then a role-filtered menu)
    Shell,

    /// Manage product categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Manage products
    #[command(subcommand)]
    Product(ProductCommand),

    /// Record stock movements
    #[command(subcommand)]
    Stock(StockCommand),

    /// Show the stock movement ledger, newest first (admin, manager)
    History(ListArgs),

    /// Manage user accounts
    #[command(subcommand)]
    User(UserCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_stock_quantity_must_be_positive() {
        let result = Cli::try_parse_from(["stockroom", "stock", "in", "1", "0"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["stockroom", "stock", "in", "1", "10"])
            .expect("positive quantity should parse");
        match cli.command {
            Some(Commands::Stock(StockCommand::In(args))) => {
                assert_eq!(args.quantity.get(), 10);
                assert_eq!(args.product, 1);
            }
            _ => panic!("expected stock in"),
        }
    }

    #[test]
    fn test_role_parses_from_flag() {
        let cli = Cli::try_parse_from([
            "stockroom", "user", "create", "bob", "bob@example.com", "--role", "manager",
        ])
        .expect("role should parse");
        match cli.command {
            Some(Commands::User(UserCommand::Create { role, .. })) => {
                assert_eq!(role, Role::Manager);
            }
            _ => panic!("expected user create"),
        }
    }
}
