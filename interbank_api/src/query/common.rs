//! Shared query infrastructure: the [`Filter`] trait, the filter encoder,
//! [`QueryString`] and the date ranges listing endpoints take.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

/// A resource-specific set of optional listing predicates.
///
/// Implementations list every field they declare, in the fixed order their
/// query keys should appear, with `None` for fields that are not set.
pub trait Filter {
    fn fields(&self) -> Vec<(&'static str, Option<String>)>;
}

/// Encodes a filter as a query fragment.
///
/// Every populated field contributes `&key=value`, in declaration order.
/// An absent filter encodes to the empty string. Values are emitted as-is;
/// they are expected to be transport-safe tokens.
pub fn encode<F: Filter>(filter: Option<&F>) -> String {
    let Some(filter) = filter else {
        return String::new();
    };
    filter
        .fields()
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| format!("&{}={}", key, value)))
        .collect()
}

/// Query string under construction. Pairs are kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryString(String);

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value`.
    pub fn pair(mut self, key: &str, value: impl Display) -> Self {
        self.0.push_str(&format!("&{}={}", key, value));
        self
    }

    /// Appends `key=value` when `value` is present.
    pub fn opt_pair(self, key: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.pair(key, value),
            None => self,
        }
    }

    /// Appends the encoded filter fragment.
    pub fn filter<F: Filter>(mut self, filter: Option<&F>) -> Self {
        self.0.push_str(&encode(filter));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The query without the leading separator.
    pub fn as_str(&self) -> &str {
        self.0.strip_prefix('&').unwrap_or(&self.0)
    }
}

/// Inclusive range of calendar days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start_str(&self) -> String {
        format_date(self.start)
    }

    pub fn end_str(&self) -> String {
        format_date(self.end)
    }
}

/// Range of instants, used by the PIX and webhook callback listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whole days from the start of `range.start` to the end of `range.end`.
    pub fn from_dates(range: DateRange) -> Self {
        let start = range.start.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
        let end = range.end.and_hms_opt(23, 59, 59).unwrap_or_default().and_utc();
        Self { start, end }
    }

    pub fn start_str(&self) -> String {
        format_instant(self.start)
    }

    pub fn end_str(&self) -> String {
        format_instant(self.end)
    }
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub(crate) fn format_flag(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

/// Sort order for listings that support it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest/smallest first). This is the default.
    #[default]
    Asc,
    /// Descending order (newest/largest first).
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "ASC",
                SortDirection::Desc => "DESC",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}
