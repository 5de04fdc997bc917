use anyhow::Result;
use interbank_api::types::{
    Balance, ChargeDetail, ChargeSummary, PixCharge, ReceivedPix, StatementEntry, Transaction,
    Webhook, WebhookCallback,
};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "md" | "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct BalanceRow {
    #[tabled(rename = "Available")]
    #[serde(rename = "Available")]
    available: String,
    #[tabled(rename = "Blocked")]
    #[serde(rename = "Blocked")]
    blocked: String,
    #[tabled(rename = "Limit")]
    #[serde(rename = "Limit")]
    limit: String,
}

#[derive(Tabled, Serialize)]
struct EntryRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    kind: String,
    #[tabled(rename = "D/C")]
    #[serde(rename = "D/C")]
    operation: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Tabled, Serialize)]
struct ChargeRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Your Number")]
    #[serde(rename = "Your Number")]
    your_number: String,
    #[tabled(rename = "Due")]
    #[serde(rename = "Due")]
    due: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Situation")]
    #[serde(rename = "Situation")]
    situation: String,
    #[tabled(rename = "Payer")]
    #[serde(rename = "Payer")]
    payer: String,
}

#[derive(Tabled, Serialize)]
struct SummaryRow {
    #[tabled(rename = "Situation")]
    #[serde(rename = "Situation")]
    situation: String,
    #[tabled(rename = "Count")]
    #[serde(rename = "Count")]
    count: u64,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
}

#[derive(Tabled, Serialize)]
struct PixChargeRow {
    #[tabled(rename = "Txid")]
    #[serde(rename = "Txid")]
    txid: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Key")]
    #[serde(rename = "Key")]
    key: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
struct ReceivedPixRow {
    #[tabled(rename = "End To End")]
    #[serde(rename = "End To End")]
    end_to_end_id: String,
    #[tabled(rename = "Txid")]
    #[serde(rename = "Txid")]
    txid: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Received")]
    #[serde(rename = "Received")]
    received_at: String,
    #[tabled(rename = "Returned")]
    #[serde(rename = "Returned")]
    returned: String,
}

#[derive(Tabled, Serialize)]
struct WebhookRow {
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
struct CallbackRow {
    #[tabled(rename = "Fired")]
    #[serde(rename = "Fired")]
    fired_at: String,
    #[tabled(rename = "Attempt")]
    #[serde(rename = "Attempt")]
    attempt: u32,
    #[tabled(rename = "Success")]
    #[serde(rename = "Success")]
    success: String,
    #[tabled(rename = "HTTP")]
    #[serde(rename = "HTTP")]
    http_status: String,
    #[tabled(rename = "Error")]
    #[serde(rename = "Error")]
    error: String,
}

// -- Row builders --

fn build_balance_rows(balance: &Balance) -> Vec<BalanceRow> {
    let blocked =
        balance.blocked_check + balance.blocked_judicially + balance.blocked_administratively;
    vec![BalanceRow {
        available: format_money(balance.available),
        blocked: format_money(blocked),
        limit: format_money(balance.limit),
    }]
}

fn build_entry_rows(entries: &[StatementEntry]) -> Vec<EntryRow> {
    entries
        .iter()
        .map(|e| EntryRow {
            date: e.entry_date.to_string(),
            kind: e.transaction_type.clone(),
            operation: e.operation_type.to_string(),
            amount: format_amount(&e.amount),
            description: e.description.clone(),
        })
        .collect()
}

fn build_transaction_rows(transactions: &[Transaction]) -> Vec<EntryRow> {
    transactions
        .iter()
        .map(|t| EntryRow {
            date: t.transaction_date.to_string(),
            kind: t.transaction_type.clone(),
            operation: t.operation_type.to_string(),
            amount: format_amount(&t.amount),
            description: t.description.clone(),
        })
        .collect()
}

fn build_charge_rows(charges: &[ChargeDetail]) -> Vec<ChargeRow> {
    charges
        .iter()
        .map(|c| ChargeRow {
            code: c.charge.request_code.clone(),
            your_number: c.charge.your_number.clone(),
            due: c.charge.due_date.to_string(),
            amount: format_amount(&c.charge.amount),
            situation: c.charge.situation.to_string(),
            payer: c.charge.payer.name.clone(),
        })
        .collect()
}

fn build_summary_rows(summary: &[ChargeSummary]) -> Vec<SummaryRow> {
    summary
        .iter()
        .map(|s| SummaryRow {
            situation: s.situation.to_string(),
            count: s.count,
            amount: format_money(s.amount),
        })
        .collect()
}

fn build_pix_charge_rows(charges: &[PixCharge]) -> Vec<PixChargeRow> {
    charges
        .iter()
        .map(|c| PixChargeRow {
            txid: c.txid.clone(),
            status: c.status.to_string(),
            amount: format_amount(&c.amount.original),
            key: c.key.clone(),
            created: c
                .calendar
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn build_received_pix_rows(received: &[ReceivedPix]) -> Vec<ReceivedPixRow> {
    received
        .iter()
        .map(|p| ReceivedPixRow {
            end_to_end_id: p.end_to_end_id.clone(),
            txid: p.txid.clone().unwrap_or_default(),
            amount: format_amount(&p.amount),
            received_at: p.received_at.format("%Y-%m-%d %H:%M").to_string(),
            returned: if p.devolutions.is_empty() {
                String::new()
            } else {
                format_amount(&returned_total(p))
            },
        })
        .collect()
}

fn build_webhook_rows(webhook: &Webhook) -> Vec<WebhookRow> {
    vec![WebhookRow {
        url: webhook.url.clone(),
        created: webhook
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default(),
    }]
}

fn build_callback_rows(callbacks: &[WebhookCallback]) -> Vec<CallbackRow> {
    callbacks
        .iter()
        .map(|c| CallbackRow {
            fired_at: c.fired_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            attempt: c.attempt,
            success: if c.success { "yes" } else { "no" }.to_string(),
            http_status: c.http_status.map(|s| s.to_string()).unwrap_or_default(),
            error: c.error_message.clone().unwrap_or_default(),
        })
        .collect()
}

/// Sum of the devolution amounts as a decimal string.
fn returned_total(pix: &ReceivedPix) -> String {
    let cents: i64 = pix
        .devolutions
        .iter()
        .filter_map(|d| to_cents(&d.amount))
        .sum();
    format!("{}.{:02}", cents / 100, cents % 100)
}

fn to_cents(amount: &str) -> Option<i64> {
    let (units, fraction) = amount.split_once('.').unwrap_or((amount, "0"));
    let fraction = format!("{:0<2}", fraction);
    Some(units.parse::<i64>().ok()? * 100 + fraction.get(..2)?.parse::<i64>().ok()?)
}

// -- Printing --

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_balance(balance: &Balance, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(balance);
            Ok(())
        }
        _ => print_rows(build_balance_rows(balance), format),
    }
}

pub fn print_statement(entries: &[StatementEntry], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&entries);
            Ok(())
        }
        _ => print_rows(build_entry_rows(entries), format),
    }
}

pub fn print_transactions(transactions: &[Transaction], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&transactions);
            Ok(())
        }
        _ => print_rows(build_transaction_rows(transactions), format),
    }
}

pub fn print_charges(charges: &[ChargeDetail], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&charges);
            Ok(())
        }
        _ => print_rows(build_charge_rows(charges), format),
    }
}

pub fn print_summary(summary: &[ChargeSummary], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&summary);
            Ok(())
        }
        _ => print_rows(build_summary_rows(summary), format),
    }
}

pub fn print_pix_charges(charges: &[PixCharge], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&charges);
            Ok(())
        }
        _ => print_rows(build_pix_charge_rows(charges), format),
    }
}

pub fn print_received_pix(received: &[ReceivedPix], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&received);
            Ok(())
        }
        _ => print_rows(build_received_pix_rows(received), format),
    }
}

pub fn print_webhook(webhook: &Webhook, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(webhook);
            Ok(())
        }
        _ => print_rows(build_webhook_rows(webhook), format),
    }
}

pub fn print_callbacks(callbacks: &[WebhookCallback], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&callbacks);
            Ok(())
        }
        _ => print_rows(build_callback_rows(callbacks), format),
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_money(value: f64) -> String {
    format!("R$ {:.2}", value)
}

fn format_amount(amount: &str) -> String {
    format!("R$ {}", amount)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
