//! Category command handlers.

use stockroom_core::auth::Operation;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output;

pub fn handle_add(ctx: &AppContext, name: &str) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let session = ctx.login(&store)?;
    session.authorize(Operation::AddCategory)?;

    let id = store.add_category(name)?;
    if !ctx.quiet() {
        println!("Added category {} (id {})", name.trim(), id);
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let session = ctx.login(&store)?;
    session.authorize(Operation::ViewCatalog)?;

    let categories = store.list_categories()?;
    output::print_categories(&categories, args.json)
}
