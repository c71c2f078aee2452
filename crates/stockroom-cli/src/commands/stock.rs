//! Stock movement command handlers.

use stockroom_core::auth::Operation;
use stockroom_core::store::MovementKind;

use crate::app::AppContext;
use crate::cli::MoveArgs;

pub fn handle_move(ctx: &AppContext, args: &MoveArgs, kind: MovementKind) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let session = ctx.login(&store)?;
    session.authorize(Operation::AdjustStock)?;

    let receipt = store.adjust_stock(args.product, args.quantity, kind)?;
    if !ctx.quiet() {
        let name = store
            .get_product(args.product)?
            .map(|product| product.name)
            .unwrap_or_else(|| format!("product {}", args.product));
        let verb = match kind {
            MovementKind::Entry => "Added",
            MovementKind::Exit => "Removed",
        };
        println!(
            "{} {} of {}; quantity is now {}",
            verb, receipt.quantity, name, receipt.new_quantity
        );
    }
    Ok(())
}
