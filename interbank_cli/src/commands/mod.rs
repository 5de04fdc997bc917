//! CLI subcommand implementations.

pub mod balance;
pub mod charges;
pub mod pix;
pub mod statement;
pub mod webhooks;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use interbank_api::DateRange;

/// Parses a `YYYY-MM-DD` argument.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", value))
}

pub fn parse_range(from: &str, to: &str) -> Result<DateRange> {
    let start = parse_date(from)?;
    let end = parse_date(to)?;
    if end < start {
        bail!("--to ({}) is before --from ({})", end, start);
    }
    Ok(DateRange::new(start, end))
}
