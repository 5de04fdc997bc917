use anyhow::Result;
use clap::Args;
use interbank_api::Client;

use super::parse_date;
use crate::output::{print_balance, OutputFormat};

#[derive(Args)]
pub struct BalanceArgs {
    /// Balance at the end of this day (YYYY-MM-DD) instead of now
    #[arg(long)]
    pub date: Option<String>,
}

pub async fn run(args: &BalanceArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let date = args.date.as_deref().map(parse_date).transpose()?;
    let balance = client.banking().balance(date).await?;
    print_balance(&balance, format)
}
