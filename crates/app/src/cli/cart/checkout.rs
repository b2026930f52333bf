use boxoffice_app::domain::carts::{CartsService, records::CheckoutOrder};
use clap::Args;
use uuid::Uuid;

use crate::{
    cli::{connect, print_json},
    config::DatabaseConfig,
};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// User UUID
    #[arg(long)]
    user: Uuid,
}

pub(crate) async fn run(args: CheckoutArgs) -> Result<(), String> {
    let context = connect(&args.database).await?;

    let order = execute(context.carts.as_ref(), args.user).await?;

    print_json(&order)
}

async fn execute(carts: &dyn CartsService, user: Uuid) -> Result<CheckoutOrder, String> {
    carts
        .checkout(user.into())
        .await
        .map_err(|error| format!("checkout failed: {error}"))
}
