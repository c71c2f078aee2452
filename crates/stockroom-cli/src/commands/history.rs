//! Movement ledger listing.

use stockroom_core::auth::Operation;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output;

pub fn handle_history(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let session = ctx.login(&store)?;
    session.authorize(Operation::ViewHistory)?;

    let records = store.list_history()?;
    output::print_history(&records, args.json)
}
