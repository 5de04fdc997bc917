mod banking;
pub use self::banking::{
    Balance, BoletoPayment, BoletoPaymentReceipt, EnrichedStatementPage, OperationType, Statement,
    StatementEntry, Transaction, TransactionType,
};

mod billing;
pub(crate) use self::billing::CancelCharge;
pub use self::billing::{
    Boleto, Charge, ChargeDetail, ChargeMessage, ChargePage, ChargePix, ChargeSituation,
    ChargeSummary, ChargeType, IssuedCharge, NewCharge, Payer, PersonType,
};

mod pix;
pub use self::pix::{
    AdditionalInfo, Calendar, Debtor, Devolution, DevolutionTimes, NewDevolution, NewPixCharge,
    PixAmount, PixCharge, PixChargePage, PixChargeRevision, PixChargeStatus, PixListParameters, PixPagination,
    ReceivedPix, ReceivedPixPage,
};

mod webhook;
pub(crate) use self::webhook::WebhookRegistration;
pub use self::webhook::{Webhook, WebhookCallback, WebhookCallbackPage};

mod document;
pub use self::document::Document;
