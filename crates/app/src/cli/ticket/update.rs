use boxoffice_app::domain::tickets::{TicketsService, data::TicketUpdate};
use clap::Args;
use uuid::Uuid;

use crate::{
    cli::{connect, print_json},
    config::DatabaseConfig,
};

#[derive(Debug, Args)]
pub(crate) struct UpdateTicketArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Ticket UUID
    #[arg(long)]
    ticket: Uuid,

    /// New display name
    #[arg(long)]
    name: String,

    /// New unit price
    #[arg(long)]
    price: u64,

    /// New stock level
    #[arg(long)]
    stock: u32,
}

pub(crate) async fn run(args: UpdateTicketArgs) -> Result<(), String> {
    let context = connect(&args.database).await?;

    let ticket = context
        .tickets
        .update_ticket(
            args.ticket.into(),
            TicketUpdate {
                name: args.name,
                price: args.price,
                stock: args.stock,
            },
        )
        .await
        .map_err(|error| format!("failed to update ticket: {error}"))?;

    print_json(&ticket)
}
