use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use train_api::TicketClient;
use train_shared::Passenger;

#[derive(Parser)]
#[command(name = "train-cli")]
#[command(about = "Buy and manage train tickets against a running ticket service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Server address, e.g. http://localhost:50055 (defaults to client.endpoint from config)
    #[arg(short, long, global = true)]
    endpoint: Option<String>,
    /// Per-call timeout in seconds (defaults to client.timeout_seconds from config)
    #[arg(short, long, global = true)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Buy a ticket
    #[command(alias = "purchase_ticket")]
    Purchase {
        from: String,
        to: String,
        first_name: String,
        last_name: String,
        email: String,
    },
    /// Show a receipt
    #[command(alias = "get_receipt")]
    GetReceipt { receipt_id: String },
    /// List passengers and seats in a section (SectionA or SectionB)
    #[command(alias = "view_users")]
    ViewUsers { section: String },
    /// Cancel a passenger's booking
    #[command(alias = "remove_user")]
    RemoveUser { email: String },
    /// Move a passenger to another seat
    #[command(alias = "modify_seat")]
    ModifySeat { email: String, new_seat: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = train_store::Config::load()?.client;

    let endpoint = cli.endpoint.unwrap_or(config.endpoint);
    let timeout = Duration::from_secs(cli.timeout.unwrap_or(config.timeout_seconds));

    let client = TicketClient::connect(&endpoint, timeout)
        .await
        .with_context(|| format!("did not connect to {}", endpoint))?;

    match cli.command {
        Commands::Purchase { from, to, first_name, last_name, email } => {
            let passenger = Passenger::new(first_name, last_name, email);
            let receipt_id = client
                .purchase(&from, &to, passenger)
                .await
                .context("could not purchase ticket")?;
            println!("Purchase Response: {}", receipt_id);
        }
        Commands::GetReceipt { receipt_id } => {
            let receipt = client
                .get_receipt(&receipt_id)
                .await
                .context("could not get receipt")?;
            println!("Receipt: {}", receipt_id);
            println!("  From:       {}", receipt.origin);
            println!("  To:         {}", receipt.destination);
            println!(
                "  Passenger:  {} {} <{}>",
                receipt.passenger.first_name, receipt.passenger.last_name, receipt.passenger.email
            );
            println!("  Price paid: {}", receipt.price_paid);
            println!("  Seat:       {}", receipt.seat);
        }
        Commands::ViewUsers { section } => {
            let rows = client
                .view_users(&section)
                .await
                .context("could not view users")?;
            println!("Users in {}:", section);
            for row in rows {
                println!("  {}  {}", row.seat, row.passenger.email);
            }
        }
        Commands::RemoveUser { email } => {
            let removed = client
                .remove_user(&email)
                .await
                .context("could not remove user")?;
            if removed {
                println!("User removed successfully.");
            } else {
                println!("Failed to remove user.");
            }
        }
        Commands::ModifySeat { email, new_seat } => {
            let modified = client
                .modify_seat(&email, &new_seat)
                .await
                .context("could not modify seat")?;
            if modified {
                println!("Seat modified successfully.");
            } else {
                println!("Failed to modify seat.");
            }
        }
    }

    Ok(())
}
