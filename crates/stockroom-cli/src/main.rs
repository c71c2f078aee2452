mod app;
mod cli;
mod commands;
mod config;
mod output;
mod prompt;

use clap::Parser;

use stockroom_core::store::MovementKind;

use crate::app::AppContext;
use crate::cli::{CategoryCommand, Cli, Commands, ProductCommand, StockCommand, UserCommand};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    match &cli.command {
        None | Some(Commands::Shell) => commands::shell::handle_shell(&ctx),
        Some(Commands::Init(args)) => commands::init::handle_init(&ctx, args),
        Some(Commands::Category(cmd)) => match cmd {
            CategoryCommand::Add { name } => commands::categories::handle_add(&ctx, name),
            CategoryCommand::List(args) => commands::categories::handle_list(&ctx, args),
        },
        Some(Commands::Product(cmd)) => match cmd {
            ProductCommand::Add { name, category } => {
                commands::products::handle_add(&ctx, name, *category)
            }
            ProductCommand::List(args) => commands::products::handle_list(&ctx, args),
        },
        Some(Commands::Stock(cmd)) => match cmd {
            StockCommand::In(args) => commands::stock::handle_move(&ctx, args, MovementKind::Entry),
            StockCommand::Out(args) => commands::stock::handle_move(&ctx, args, MovementKind::Exit),
        },
        Some(Commands::History(args)) => commands::history::handle_history(&ctx, args),
        Some(Commands::User(cmd)) => match cmd {
            UserCommand::Create {
                username,
                new_email,
                role,
            } => commands::users::handle_create(&ctx, username, new_email, *role),
            UserCommand::List(args) => commands::users::handle_list(&ctx, args),
        },
    }
}
