use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use clap::{Args, Subcommand};
use interbank_api::{CallbackFilter, Client, TimeRange};

use super::parse_range;
use crate::output::{print_callbacks, print_webhook, OutputFormat};

#[derive(Args)]
pub struct WebhookArgs {
    /// Resource family: banking, billing, pix
    #[arg(long, default_value = "pix")]
    pub family: String,

    #[command(subcommand)]
    pub command: WebhookCommand,
}

#[derive(Subcommand)]
pub enum WebhookCommand {
    /// Show the registered webhook
    Get {
        /// Event type (banking) or PIX key (pix). Ignored for billing
        #[arg(long, default_value = "")]
        id: String,
    },
    /// Register or replace the webhook
    Set {
        #[arg(long, default_value = "")]
        id: String,
        /// HTTPS URL notifications are delivered to
        url: String,
    },
    /// Remove the webhook
    Delete {
        #[arg(long, default_value = "")]
        id: String,
    },
    /// List delivery attempts
    Callbacks {
        #[arg(long, default_value = "")]
        id: String,

        /// First day (YYYY-MM-DD). Defaults to yesterday
        #[arg(long)]
        from: Option<String>,

        /// Last day, inclusive (YYYY-MM-DD). Defaults to today
        #[arg(long)]
        to: Option<String>,

        /// Only attempts for this txid
        #[arg(long)]
        txid: Option<String>,
    },
}

pub async fn run(args: &WebhookArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let webhooks = match args.family.as_str() {
        "banking" => client.banking().webhooks(),
        "billing" => client.billing().webhooks(),
        "pix" => client.pix().webhooks(),
        other => {
            return Err(anyhow!(
                "Unknown family '{}', expected banking, billing or pix",
                other
            ))
        }
    };
    let route = webhooks.route();

    match &args.command {
        WebhookCommand::Get { id } => {
            let webhook = webhooks.retrieve(id, route.read_scope()).await?;
            print_webhook(&webhook, format)?;
        }
        WebhookCommand::Set { id, url } => {
            webhooks.include(id, url, route.write_scope()).await?;
            eprintln!("Webhook registered: {}", url);
        }
        WebhookCommand::Delete { id } => {
            webhooks.delete(id, route.write_scope()).await?;
            eprintln!("Webhook removed");
        }
        WebhookCommand::Callbacks { id, from, to, txid } => {
            let today = Utc::now().date_naive();
            let from = from
                .clone()
                .unwrap_or_else(|| (today - Duration::days(1)).to_string());
            let to = to.clone().unwrap_or_else(|| today.to_string());
            let range = TimeRange::from_dates(parse_range(&from, &to)?);
            let filter = txid
                .as_deref()
                .map(|txid| CallbackFilter::default().with_txid(txid));
            let callbacks = webhooks
                .callbacks(id, &range, filter.as_ref(), route.read_scope())
                .await?;
            eprintln!("{} callbacks", callbacks.len());
            print_callbacks(&callbacks, format)?;
        }
    }

    Ok(())
}
