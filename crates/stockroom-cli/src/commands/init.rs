//! Database initialization and the bootstrap admin account.

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::prompt;

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let path = ctx.database_path()?;
    let mut store = ctx.open_store()?;

    if store.has_users()? {
        if !ctx.quiet() {
            println!(
                "Database ready at {} (admin account already exists)",
                path.display()
            );
        }
        return Ok(());
    }

    if !ctx.quiet() && !args.no_input {
        println!("No accounts found. Create the administrator account.");
    }

    let username = match args.username {
        Some(ref value) => value.clone(),
        None if args.no_input => {
            return Err(anyhow::anyhow!("--no-input requires --username"));
        }
        None => prompt::required_input("Username")?,
    };
    let email = match ctx.account_email() {
        Ok(value) => value.to_string(),
        Err(err) if args.no_input => return Err(err),
        Err(_) => prompt::email_input("Email")?,
    };
    let password = prompt::new_password()?;

    let created = store.bootstrap_admin(&username, &email, &password)?;
    if !ctx.quiet() {
        match created {
            Some(_) => println!("{} created as administrator", username),
            None => println!("Admin account already exists; nothing to do"),
        }
    }
    Ok(())
}
