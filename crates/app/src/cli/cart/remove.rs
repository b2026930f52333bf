use boxoffice_app::domain::carts::CartsService;
use clap::Args;
use uuid::Uuid;

use crate::{
    cli::{connect, print_json},
    config::DatabaseConfig,
};

#[derive(Debug, Args)]
pub(crate) struct RemoveFromCartArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// User UUID
    #[arg(long)]
    user: Uuid,

    /// Cart line UUID
    #[arg(long)]
    line: Uuid,
}

pub(crate) async fn run(args: RemoveFromCartArgs) -> Result<(), String> {
    let context = connect(&args.database).await?;

    let removed = context
        .carts
        .remove_from_cart(args.user.into(), args.line.into())
        .await
        .map_err(|error| format!("failed to remove from cart: {error}"))?;

    print_json(&removed)
}
