use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use interbank_api::types::PixChargeStatus;
use interbank_api::{Client, PixChargeFilter, ReceivedPixFilter, TimeRange};

use super::parse_range;
use crate::output::{print_json, print_pix_charges, print_received_pix, OutputFormat};

#[derive(Args)]
pub struct PixArgs {
    #[command(subcommand)]
    pub command: PixCommand,
}

#[derive(Subcommand)]
pub enum PixCommand {
    /// List immediate charges created in a date range
    Charges {
        #[command(flatten)]
        range: RangeArgs,

        /// Status: ativa, concluida, removida-pelo-usuario-recebedor, removida-pelo-psp
        #[arg(long)]
        status: Option<String>,

        /// Debtor CPF
        #[arg(long)]
        cpf: Option<String>,

        /// Debtor CNPJ
        #[arg(long)]
        cnpj: Option<String>,
    },
    /// List PIX received in a date range
    Received {
        #[command(flatten)]
        range: RangeArgs,

        /// Only PIX paying this charge
        #[arg(long)]
        txid: Option<String>,

        /// Only PIX with at least one devolution
        #[arg(long)]
        returned: bool,
    },
    /// Show one immediate charge
    Show { txid: String },
}

#[derive(Args)]
pub struct RangeArgs {
    /// First day (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,

    /// Last day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: String,
}

impl RangeArgs {
    fn time_range(&self) -> Result<TimeRange> {
        Ok(TimeRange::from_dates(parse_range(&self.from, &self.to)?))
    }
}

pub async fn run(args: &PixArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let pix = client.pix();

    match &args.command {
        PixCommand::Charges {
            range,
            status,
            cpf,
            cnpj,
        } => {
            let mut filter = PixChargeFilter::default();
            if let Some(status) = status {
                let status: PixChargeStatus = status
                    .parse()
                    .map_err(|_| anyhow!("Unknown status '{}'", status))?;
                filter = filter.with_status(status);
            }
            if let Some(cpf) = cpf {
                filter = filter.with_cpf(cpf);
            }
            if let Some(cnpj) = cnpj {
                filter = filter.with_cnpj(cnpj);
            }
            let charges = pix.list_charges(&range.time_range()?, Some(&filter)).await?;
            eprintln!("{} charges", charges.len());
            print_pix_charges(&charges, format)?;
        }
        PixCommand::Received {
            range,
            txid,
            returned,
        } => {
            let mut filter = ReceivedPixFilter::default();
            if let Some(txid) = txid {
                filter = filter.with_txid(txid);
            }
            if *returned {
                filter = filter.with_devolution_present(true);
            }
            let received = pix.list_received(&range.time_range()?, Some(&filter)).await?;
            eprintln!("{} received", received.len());
            print_received_pix(&received, format)?;
        }
        PixCommand::Show { txid } => {
            let charge = pix.retrieve_charge(txid).await?;
            match format {
                OutputFormat::Json => print_json(&charge),
                _ => print_pix_charges(std::slice::from_ref(&charge), format)?,
            }
        }
    }

    Ok(())
}
