use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use interbank_api::types::{OperationType, TransactionType};
use interbank_api::{Client, StatementFilter};

use super::parse_range;
use crate::output::{print_statement, print_transactions, OutputFormat};

#[derive(Args)]
pub struct StatementArgs {
    /// First day of the statement (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,

    /// Last day of the statement (YYYY-MM-DD)
    #[arg(long)]
    pub to: String,

    /// Fetch the enriched statement, walking every page
    #[arg(long)]
    pub enriched: bool,

    /// Only debits (d) or credits (c). Enriched statement only
    #[arg(long)]
    pub operation: Option<String>,

    /// Only one transaction type, e.g. pix, pagamento. Enriched statement only
    #[arg(long = "type")]
    pub transaction_type: Option<String>,

    /// Save the statement as a PDF at this path instead of printing it
    #[arg(long)]
    pub pdf: Option<PathBuf>,
}

pub async fn run(args: &StatementArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let range = parse_range(&args.from, &args.to)?;
    let banking = client.banking();

    if let Some(ref path) = args.pdf {
        banking.save_statement_pdf(&range, path).await?;
        eprintln!("Statement saved to {}", path.display());
        return Ok(());
    }

    if !args.enriched {
        let statement = banking.statement(&range).await?;
        eprintln!("{} entries", statement.entries.len());
        return print_statement(&statement.entries, format);
    }

    let mut filter = StatementFilter::default();
    if let Some(ref operation) = args.operation {
        let operation = match operation.to_ascii_lowercase().as_str() {
            "d" | "debit" => OperationType::Debit,
            "c" | "credit" => OperationType::Credit,
            other => return Err(anyhow!("Unknown operation '{}', expected d or c", other)),
        };
        filter = filter.with_operation_type(operation);
    }
    if let Some(ref kind) = args.transaction_type {
        let kind: TransactionType = kind
            .parse()
            .map_err(|_| anyhow!("Unknown transaction type '{}'", kind))?;
        filter = filter.with_transaction_type(kind);
    }

    let transactions = banking.enriched_statement(&range, Some(&filter)).await?;
    eprintln!("{} transactions", transactions.len());
    print_transactions(&transactions, format)
}
