use boxoffice_app::context::AppContext;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::{DatabaseConfig, LoggingConfig};

mod cart;
mod db;
mod ticket;

#[derive(Debug, Parser)]
#[command(name = "boxoffice", about = "Box Office CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Ticket(ticket::TicketCommand),
    Cart(cart::CartCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Ticket(command) => ticket::run(command).await,
            Commands::Cart(command) => cart::run(command).await,
        }
    }
}

async fn connect(database: &DatabaseConfig) -> Result<AppContext, String> {
    AppContext::from_database_url(&database.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|error| format!("failed to render output: {error}"))?;

    println!("{rendered}");

    Ok(())
}
