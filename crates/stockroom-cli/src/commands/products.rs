//! Product command handlers.

use stockroom_core::auth::Operation;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output;

pub fn handle_add(ctx: &AppContext, name: &str, category_id: i64) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let session = ctx.login(&store)?;
    session.authorize(Operation::AddProduct)?;

    let id = store.add_product(name, category_id)?;
    if !ctx.quiet() {
        println!("Added product {} (id {}), quantity 0", name.trim(), id);
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let session = ctx.login(&store)?;
    session.authorize(Operation::ViewCatalog)?;

    let products = store.list_products()?;
    output::print_products(&products, args.json)
}
