use boxoffice_app::domain::tickets::TicketsService;
use clap::Args;
use uuid::Uuid;

use crate::{
    cli::{connect, print_json},
    config::DatabaseConfig,
};

#[derive(Debug, Args)]
pub(crate) struct ShowTicketArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Ticket UUID
    #[arg(long)]
    ticket: Uuid,
}

pub(crate) async fn run(args: ShowTicketArgs) -> Result<(), String> {
    let context = connect(&args.database).await?;

    let ticket = context
        .tickets
        .get_ticket(args.ticket.into())
        .await
        .map_err(|error| format!("failed to get ticket: {error}"))?;

    print_json(&ticket)
}
