use clap::{Args, Subcommand};

mod create;
mod delete;
mod list;
mod show;
mod update;

#[derive(Debug, Args)]
pub(crate) struct TicketCommand {
    #[command(subcommand)]
    command: TicketSubcommand,
}

#[derive(Debug, Subcommand)]
enum TicketSubcommand {
    Create(create::CreateTicketArgs),
    List(list::ListTicketsArgs),
    Show(show::ShowTicketArgs),
    Update(update::UpdateTicketArgs),
    Delete(delete::DeleteTicketArgs),
}

pub(crate) async fn run(command: TicketCommand) -> Result<(), String> {
    match command.command {
        TicketSubcommand::Create(args) => create::run(args).await,
        TicketSubcommand::List(args) => list::run(args).await,
        TicketSubcommand::Show(args) => show::run(args).await,
        TicketSubcommand::Update(args) => update::run(args).await,
        TicketSubcommand::Delete(args) => delete::run(args).await,
    }
}
