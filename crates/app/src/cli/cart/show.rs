use boxoffice_app::domain::carts::CartsService;
use clap::Args;
use uuid::Uuid;

use crate::{
    cli::{connect, print_json},
    config::DatabaseConfig,
};

#[derive(Debug, Args)]
pub(crate) struct ShowCartArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// User UUID
    #[arg(long)]
    user: Uuid,
}

pub(crate) async fn run(args: ShowCartArgs) -> Result<(), String> {
    let context = connect(&args.database).await?;

    let cart = context
        .carts
        .get_cart(args.user.into())
        .await
        .map_err(|error| format!("failed to get cart: {error}"))?;

    print_json(&cart)
}
