use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use interbank_api::types::{ChargeSituation, ChargeType};
use interbank_api::{ChargeFilter, ChargeSortBy, Client, FilterDateBy, SortDirection};

use super::parse_range;
use crate::output::{print_charges, print_json, print_summary, OutputFormat};

#[derive(Args)]
pub struct ChargesArgs {
    #[command(subcommand)]
    pub command: ChargesCommand,
}

#[derive(Subcommand)]
pub enum ChargesCommand {
    /// List charges in a date range
    List(ListArgs),
    /// Totals per situation in a date range
    Summary(ListArgs),
    /// Show one charge
    Show {
        /// Request code returned when the charge was issued
        code: String,
    },
    /// Save the printable charge as a PDF
    Pdf {
        code: String,
        /// Output file
        #[arg(long)]
        out: PathBuf,
    },
    /// Cancel a charge
    Cancel {
        code: String,
        /// Cancellation reason, e.g. ACERTOS, APEDIDODOCLIENTE
        #[arg(long, default_value = "APEDIDODOCLIENTE")]
        reason: String,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,

    /// Last day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub to: String,

    /// Date the range applies to: due, issue, payment
    #[arg(long)]
    pub date_by: Option<String>,

    /// Situation, e.g. recebido, a-receber, atrasado
    #[arg(long)]
    pub situation: Option<String>,

    /// Payer name
    #[arg(long)]
    pub payer: Option<String>,

    /// Payer CPF or CNPJ, digits only
    #[arg(long)]
    pub payer_document: Option<String>,

    /// Your own charge identifier
    #[arg(long)]
    pub your_number: Option<String>,

    /// Charge type: simples, parcelado, recorrente
    #[arg(long = "type")]
    pub charge_type: Option<String>,

    /// Sort field: payer, type, code, your-number, issue-date, due-date, amount, situation
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,
}

impl ListArgs {
    fn filter(&self) -> Result<ChargeFilter> {
        let mut filter = ChargeFilter::default();
        if let Some(ref date_by) = self.date_by {
            let date_by: FilterDateBy = date_by
                .parse()
                .map_err(|_| anyhow!("Unknown --date-by '{}', expected due, issue or payment", date_by))?;
            filter = filter.with_filter_date_by(date_by);
        }
        if let Some(ref situation) = self.situation {
            let situation: ChargeSituation = situation
                .parse()
                .map_err(|_| anyhow!("Unknown situation '{}'", situation))?;
            filter = filter.with_situation(situation);
        }
        if let Some(ref payer) = self.payer {
            filter = filter.with_payer(payer);
        }
        if let Some(ref document) = self.payer_document {
            filter = filter.with_payer_document(document);
        }
        if let Some(ref your_number) = self.your_number {
            filter = filter.with_your_number(your_number);
        }
        if let Some(ref charge_type) = self.charge_type {
            let charge_type = match charge_type.to_ascii_lowercase().as_str() {
                "simples" => ChargeType::Simples,
                "parcelado" => ChargeType::Parcelado,
                "recorrente" => ChargeType::Recorrente,
                other => return Err(anyhow!("Unknown charge type '{}'", other)),
            };
            filter = filter.with_charge_type(charge_type);
        }
        if let Some(ref sort_by) = self.sort_by {
            let sort_by: ChargeSortBy = sort_by
                .parse()
                .map_err(|_| anyhow!("Unknown --sort-by '{}'", sort_by))?;
            filter = filter.with_sort_by(sort_by);
        }
        if self.desc {
            filter = filter.with_sort_direction(SortDirection::Desc);
        }
        Ok(filter)
    }
}

pub async fn run(args: &ChargesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let billing = client.billing();

    match &args.command {
        ChargesCommand::List(list) => {
            let range = parse_range(&list.from, &list.to)?;
            let charges = billing.list(&range, Some(&list.filter()?)).await?;
            eprintln!("{} charges", charges.len());
            print_charges(&charges, format)?;
        }
        ChargesCommand::Summary(list) => {
            let range = parse_range(&list.from, &list.to)?;
            let summary = billing.summary(&range, Some(&list.filter()?)).await?;
            print_summary(&summary, format)?;
        }
        ChargesCommand::Show { code } => {
            let charge = billing.retrieve(code).await?;
            match format {
                OutputFormat::Json => print_json(&charge),
                _ => print_charges(std::slice::from_ref(&charge), format)?,
            }
        }
        ChargesCommand::Pdf { code, out } => {
            billing.save_pdf(code, out).await?;
            eprintln!("Charge {} saved to {}", code, out.display());
        }
        ChargesCommand::Cancel { code, reason } => {
            billing.cancel(code, reason).await?;
            eprintln!("Charge {} cancelled", code);
        }
    }

    Ok(())
}
