use boxoffice_app::domain::carts::data::Quantity;
use clap::{Args, Subcommand};

mod add;
mod checkout;
mod remove;
mod show;
mod update;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    Show(show::ShowCartArgs),
    Add(add::AddToCartArgs),
    Update(update::UpdateCartArgs),
    Remove(remove::RemoveFromCartArgs),
    Checkout(checkout::CheckoutArgs),
}

pub(crate) async fn run(command: CartCommand) -> Result<(), String> {
    match command.command {
        CartSubcommand::Show(args) => show::run(args).await,
        CartSubcommand::Add(args) => add::run(args).await,
        CartSubcommand::Update(args) => update::run(args).await,
        CartSubcommand::Remove(args) => remove::run(args).await,
        CartSubcommand::Checkout(args) => checkout::run(args).await,
    }
}

fn quantity(value: u32) -> Result<Quantity, String> {
    Quantity::try_from(value).map_err(|error| error.to_string())
}
