//! Resource families, each reached through a method on [`crate::Client`].

mod banking;
mod billing;
mod pix;

pub use self::banking::BankingApi;
pub use self::billing::BillingApi;
pub use self::pix::PixApi;
