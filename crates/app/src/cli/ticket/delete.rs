use boxoffice_app::domain::tickets::TicketsService;
use clap::Args;
use uuid::Uuid;

use crate::{cli::connect, config::DatabaseConfig};

#[derive(Debug, Args)]
pub(crate) struct DeleteTicketArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Ticket UUID
    #[arg(long)]
    ticket: Uuid,
}

pub(crate) async fn run(args: DeleteTicketArgs) -> Result<(), String> {
    let context = connect(&args.database).await?;

    context
        .tickets
        .delete_ticket(args.ticket.into())
        .await
        .map_err(|error| format!("failed to delete ticket: {error}"))?;

    println!("deleted ticket {}", args.ticket);

    Ok(())
}
