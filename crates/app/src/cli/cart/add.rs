use boxoffice_app::domain::carts::{CartsService, records::CartLineRecord};
use clap::Args;
use uuid::Uuid;

use crate::{
    cli::{connect, print_json},
    config::DatabaseConfig,
};

use super::quantity;

#[derive(Debug, Args)]
pub(crate) struct AddToCartArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// User UUID
    #[arg(long)]
    user: Uuid,

    /// Ticket UUID
    #[arg(long)]
    ticket: Uuid,

    /// Number of tickets to add
    #[arg(long, default_value_t = 1)]
    quantity: u32,
}

pub(crate) async fn run(args: AddToCartArgs) -> Result<(), String> {
    let context = connect(&args.database).await?;

    let line = execute(context.carts.as_ref(), &args).await?;

    print_json(&line)
}

async fn execute(
    carts: &dyn CartsService,
    args: &AddToCartArgs,
) -> Result<CartLineRecord, String> {
    let quantity = quantity(args.quantity)?;

    carts
        .add_to_cart(args.user.into(), args.ticket.into(), quantity)
        .await
        .map_err(|error| format!("failed to add to cart: {error}"))
}
