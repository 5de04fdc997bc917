pub mod api;
mod client;
pub mod codec;
mod config;
mod errors;
mod pagination;
mod query;
mod scope;
mod sink;
pub mod transport;
pub mod types;
mod webhooks;
pub use self::client::Client;
pub use self::config::{Config, Environment};
pub use self::errors::Error;
pub use self::pagination::{fetch_all, Page, Paginated, DEFAULT_PAGE_SIZE};
pub use self::query::{
    encode as encode_filter, CallbackFilter, ChargeFilter, ChargeSortBy, DateRange, Filter,
    FilterDateBy, PixChargeFilter, QueryString, ReceivedPixFilter, SortDirection,
    StatementFilter, TimeRange,
};
pub use self::scope::Scope;
pub use self::webhooks::{WebhookManager, WebhookRoute};
