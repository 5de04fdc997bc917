mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use interbank_api::{Client, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "interbank")]
#[command(about = "Query balances, statements, charges and PIX from the banking API")]
struct Cli {
    /// Output format: table, json, csv, markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the account balance
    Balance(commands::balance::BalanceArgs),
    /// Show the account statement
    Statement(commands::statement::StatementArgs),
    /// Issue, list and manage charges
    Charges(commands::charges::ChargesArgs),
    /// List PIX charges and received PIX
    Pix(commands::pix::PixArgs),
    /// Manage webhook subscriptions
    Webhook(commands::webhooks::WebhookArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("interbank=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let config = Config::from_env().context("Failed to load configuration")?;
    let client = Client::new(config)?;

    match &cli.command {
        Commands::Balance(args) => commands::balance::run(args, &client, &format).await?,
        Commands::Statement(args) => commands::statement::run(args, &client, &format).await?,
        Commands::Charges(args) => commands::charges::run(args, &client, &format).await?,
        Commands::Pix(args) => commands::pix::run(args, &client, &format).await?,
        Commands::Webhook(args) => commands::webhooks::run(args, &client, &format).await?,
    }

    Ok(())
}
