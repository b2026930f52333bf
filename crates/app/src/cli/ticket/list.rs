use boxoffice_app::domain::tickets::TicketsService;
use clap::Args;

use crate::{
    cli::{connect, print_json},
    config::DatabaseConfig,
};

#[derive(Debug, Args)]
pub(crate) struct ListTicketsArgs {
    #[command(flatten)]
    database: DatabaseConfig,
}

pub(crate) async fn run(args: ListTicketsArgs) -> Result<(), String> {
    let context = connect(&args.database).await?;

    let tickets = context
        .tickets
        .list_tickets()
        .await
        .map_err(|error| format!("failed to list tickets: {error}"))?;

    print_json(&tickets)
}
