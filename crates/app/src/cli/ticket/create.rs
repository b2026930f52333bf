use boxoffice_app::domain::tickets::{TicketsService, data::NewTicket, records::TicketRecord};
use clap::Args;
use uuid::Uuid;

use crate::{
    cli::{connect, print_json},
    config::DatabaseConfig,
};

#[derive(Debug, Args)]
pub(crate) struct CreateTicketArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Ticket display name
    #[arg(long)]
    name: String,

    /// Unit price in the smallest currency unit
    #[arg(long)]
    price: u64,

    /// Tickets available for sale
    #[arg(long)]
    stock: u32,

    /// Optional ticket UUID; generated when omitted
    #[arg(long)]
    ticket_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateTicketArgs) -> Result<(), String> {
    let context = connect(&args.database).await?;

    let ticket = execute(context.tickets.as_ref(), args).await?;

    print_json(&ticket)
}

async fn execute(
    tickets: &dyn TicketsService,
    args: CreateTicketArgs,
) -> Result<TicketRecord, String> {
    if args.name.trim().is_empty() {
        return Err("ticket name cannot be empty".to_string());
    }

    tickets
        .create_ticket(NewTicket {
            uuid: args.ticket_uuid.unwrap_or_else(Uuid::now_v7).into(),
            name: args.name,
            price: args.price,
            stock: args.stock,
        })
        .await
        .map_err(|error| format!("failed to create ticket: {error}"))
}
