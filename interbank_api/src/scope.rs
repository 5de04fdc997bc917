//! OAuth scopes the API requires per operation.

/// Permission string a request is authorized under.
///
/// The transport exchanges the client credentials for a token carrying
/// exactly this scope before sending the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Read balances and statements.
    StatementRead,
    /// Pay boletos from the account.
    BoletoPaymentWrite,
    /// Read scheduled and settled boleto payments.
    BoletoPaymentRead,
    /// Read banking webhooks and their callbacks.
    BankingWebhookRead,
    /// Register or remove banking webhooks.
    BankingWebhookWrite,
    /// Read charges (boletos with PIX).
    BillingRead,
    /// Issue, cancel and register webhooks for charges.
    BillingWrite,
    /// Read immediate PIX charges.
    PixChargeRead,
    /// Create or update immediate PIX charges.
    PixChargeWrite,
    /// Read received PIX.
    PixRead,
    /// Request PIX devolutions.
    PixWrite,
    /// Read PIX webhooks and their callbacks.
    PixWebhookRead,
    /// Register or remove PIX webhooks.
    PixWebhookWrite,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::StatementRead => "extrato.read",
            Scope::BoletoPaymentWrite => "pagamento-boleto.write",
            Scope::BoletoPaymentRead => "pagamento-boleto.read",
            Scope::BankingWebhookRead => "webhook-banking.read",
            Scope::BankingWebhookWrite => "webhook-banking.write",
            Scope::BillingRead => "boleto-cobranca.read",
            Scope::BillingWrite => "boleto-cobranca.write",
            Scope::PixChargeRead => "cob.read",
            Scope::PixChargeWrite => "cob.write",
            Scope::PixRead => "pix.read",
            Scope::PixWrite => "pix.write",
            Scope::PixWebhookRead => "webhook.read",
            Scope::PixWebhookWrite => "webhook.write",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
