use boxoffice_app::domain::carts::CartsService;
use clap::Args;
use uuid::Uuid;

use crate::{
    cli::{connect, print_json},
    config::DatabaseConfig,
};

use super::quantity;

#[derive(Debug, Args)]
pub(crate) struct UpdateCartArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// User UUID
    #[arg(long)]
    user: Uuid,

    /// Cart line UUID
    #[arg(long)]
    line: Uuid,

    /// New quantity for the line
    #[arg(long)]
    quantity: u32,
}

pub(crate) async fn run(args: UpdateCartArgs) -> Result<(), String> {
    let quantity = quantity(args.quantity)?;
    let context = connect(&args.database).await?;

    let line = context
        .carts
        .update_cart_quantity(args.user.into(), args.line.into(), quantity)
        .await
        .map_err(|error| format!("failed to update cart: {error}"))?;

    print_json(&line)
}
