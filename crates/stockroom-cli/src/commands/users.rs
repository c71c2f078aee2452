//! User account command handlers.

use stockroom_core::auth::{Operation, Role};
use stockroom_core::store::NewUser;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output;
use crate::prompt;

pub fn handle_create(
    ctx: &AppContext,
    username: &str,
    new_email: &str,
    role: Role,
) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let session = ctx.login(&store)?;
    session.authorize(Operation::ManageUsers)?;

    let password = prompt::new_password()?;
    let id = store.create_user(&NewUser::new(username, new_email, password, role))?;
    if !ctx.quiet() {
        println!("User {} ({}) created (id {})", username, role, id);
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let session = ctx.login(&store)?;
    session.authorize(Operation::ManageUsers)?;

    let users = store.list_users()?;
    output::print_users(&users, args.json)
}
