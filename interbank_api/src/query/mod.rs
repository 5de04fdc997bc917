mod common;
pub use self::common::{encode, DateRange, Filter, QueryString, SortDirection, TimeRange};
pub(crate) use self::common::format_date;

mod banking;
pub use self::banking::StatementFilter;

mod billing;
pub use self::billing::{ChargeFilter, ChargeSortBy, FilterDateBy};

mod pix;
pub use self::pix::{PixChargeFilter, ReceivedPixFilter};

mod webhook;
pub use self::webhook::CallbackFilter;
