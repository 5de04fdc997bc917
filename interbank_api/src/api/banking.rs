use std::path::Path;

use chrono::NaiveDate;

use crate::{
    client::Client,
    pagination::Page,
    query::{format_date, DateRange, QueryString, StatementFilter},
    sink,
    transport::Transport,
    types::{
        Balance, BoletoPayment, BoletoPaymentReceipt, Document, EnrichedStatementPage, Statement,
        Transaction,
    },
    webhooks::{WebhookManager, WebhookRoute},
    Error, Scope,
};

const BASE: &str = "/banking/v2";

/// Balance, statements and payments of the checking account.
pub struct BankingApi<'c, T> {
    client: &'c Client<T>,
}

impl<'c, T: Transport> BankingApi<'c, T> {
    pub(crate) fn new(client: &'c Client<T>) -> Self {
        Self { client }
    }

    /// Account balance, at the end of `date` when given, otherwise now.
    pub async fn balance(&self, date: Option<NaiveDate>) -> Result<Balance, Error> {
        let query = QueryString::new().opt_pair("dataSaldo", date.map(format_date));
        self.client
            .get(&format!("{}/saldo", BASE), &query, Scope::StatementRead)
            .await
    }

    pub async fn statement(&self, range: &DateRange) -> Result<Statement, Error> {
        self.client
            .get(
                &format!("{}/extrato", BASE),
                &range_query(range),
                Scope::StatementRead,
            )
            .await
    }

    pub async fn enriched_statement_page(
        &self,
        range: &DateRange,
        filter: Option<&StatementFilter>,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Transaction>, Error> {
        let query = range_query(range).filter(filter);
        self.client
            .fetch_page::<EnrichedStatementPage>(
                &format!("{}/extrato/completo", BASE),
                &query,
                page,
                page_size,
                Scope::StatementRead,
            )
            .await
    }

    /// Every enriched transaction in `range`, across all pages.
    pub async fn enriched_statement(
        &self,
        range: &DateRange,
        filter: Option<&StatementFilter>,
    ) -> Result<Vec<Transaction>, Error> {
        let query = range_query(range).filter(filter);
        self.client
            .fetch_all::<EnrichedStatementPage>(
                &format!("{}/extrato/completo", BASE),
                &query,
                Scope::StatementRead,
            )
            .await
    }

    /// The statement for `range` as PDF bytes.
    pub async fn statement_pdf(&self, range: &DateRange) -> Result<Vec<u8>, Error> {
        let document: Document = self
            .client
            .get(
                &format!("{}/extrato/exportar", BASE),
                &range_query(range),
                Scope::StatementRead,
            )
            .await?;
        document.bytes()
    }

    pub async fn save_statement_pdf(&self, range: &DateRange, path: &Path) -> Result<(), Error> {
        let bytes = self.statement_pdf(range).await?;
        sink::write_file(path, &bytes).await
    }

    pub async fn pay_boleto(&self, payment: &BoletoPayment) -> Result<BoletoPaymentReceipt, Error> {
        self.client
            .post(
                &format!("{}/pagamento", BASE),
                Scope::BoletoPaymentWrite,
                payment,
            )
            .await
    }

    /// Webhooks keyed by banking event type, e.g. `pix-pagamento`.
    pub fn webhooks(&self) -> WebhookManager<'c, T> {
        WebhookManager::new(self.client, WebhookRoute::Banking)
    }
}

fn range_query(range: &DateRange) -> QueryString {
    QueryString::new()
        .pair("dataInicio", range.start_str())
        .pair("dataFim", range.end_str())
}
