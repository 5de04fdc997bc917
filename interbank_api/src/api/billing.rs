use std::path::Path;

use crate::{
    client::Client,
    pagination::Page,
    query::{ChargeFilter, DateRange, QueryString},
    sink,
    transport::Transport,
    types::{
        CancelCharge, ChargeDetail, ChargePage, ChargeSummary, Document, IssuedCharge, NewCharge,
    },
    webhooks::{WebhookManager, WebhookRoute},
    Error, Scope,
};

const CHARGES: &str = "/cobranca/v3/cobrancas";

/// Charges (boleto with PIX) issued against the account.
pub struct BillingApi<'c, T> {
    client: &'c Client<T>,
}

impl<'c, T: Transport> BillingApi<'c, T> {
    pub(crate) fn new(client: &'c Client<T>) -> Self {
        Self { client }
    }

    pub async fn issue(&self, charge: &NewCharge) -> Result<IssuedCharge, Error> {
        tracing::debug!("Issuing charge {}", charge.your_number);
        self.client.post(CHARGES, Scope::BillingWrite, charge).await
    }

    pub async fn retrieve(&self, request_code: &str) -> Result<ChargeDetail, Error> {
        self.client
            .get(
                &format!("{}/{}", CHARGES, request_code),
                &QueryString::new(),
                Scope::BillingRead,
            )
            .await
    }

    pub async fn list_page(
        &self,
        range: &DateRange,
        filter: Option<&ChargeFilter>,
        page: u32,
        page_size: u32,
    ) -> Result<Page<ChargeDetail>, Error> {
        self.client
            .fetch_page::<ChargePage>(
                CHARGES,
                &range_query(range, filter),
                page,
                page_size,
                Scope::BillingRead,
            )
            .await
    }

    /// Every charge matching `filter` in `range`, across all pages.
    pub async fn list(
        &self,
        range: &DateRange,
        filter: Option<&ChargeFilter>,
    ) -> Result<Vec<ChargeDetail>, Error> {
        self.client
            .fetch_all::<ChargePage>(CHARGES, &range_query(range, filter), Scope::BillingRead)
            .await
    }

    /// Amount and count per situation.
    pub async fn summary(
        &self,
        range: &DateRange,
        filter: Option<&ChargeFilter>,
    ) -> Result<Vec<ChargeSummary>, Error> {
        self.client
            .get(
                &format!("{}/sumario", CHARGES),
                &range_query(range, filter),
                Scope::BillingRead,
            )
            .await
    }

    /// The printable charge as PDF bytes.
    pub async fn pdf(&self, request_code: &str) -> Result<Vec<u8>, Error> {
        let document: Document = self
            .client
            .get(
                &format!("{}/{}/pdf", CHARGES, request_code),
                &QueryString::new(),
                Scope::BillingRead,
            )
            .await?;
        document.bytes()
    }

    pub async fn save_pdf(&self, request_code: &str, path: &Path) -> Result<(), Error> {
        let bytes = self.pdf(request_code).await?;
        sink::write_file(path, &bytes).await
    }

    pub async fn cancel(&self, request_code: &str, reason: &str) -> Result<(), Error> {
        tracing::debug!("Cancelling charge {}", request_code);
        self.client
            .post_discarding(
                &format!("{}/{}/cancelar", CHARGES, request_code),
                Scope::BillingWrite,
                &CancelCharge { reason },
            )
            .await
    }

    /// The account-wide charge webhook. Scope ids passed to it are ignored.
    pub fn webhooks(&self) -> WebhookManager<'c, T> {
        WebhookManager::new(self.client, WebhookRoute::Billing)
    }
}

fn range_query(range: &DateRange, filter: Option<&ChargeFilter>) -> QueryString {
    QueryString::new()
        .pair("dataInicial", range.start_str())
        .pair("dataFinal", range.end_str())
        .filter(filter)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::query::FilterDateBy;
    use crate::transport::testing::FakeTransport;
    use crate::transport::TransportFailure;
    use crate::types::{ChargeSituation, Payer, PersonType};

    fn client() -> Client<FakeTransport> {
        Client::with_transport(FakeTransport::new(), "https://api.test")
    }

    fn april() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
        )
    }

    fn charge_json(code: &str) -> serde_json::Value {
        json!({
            "cobranca": {
                "codigoSolicitacao": code,
                "seuNumero": "0001",
                "dataEmissao": "2024-04-01",
                "dataVencimento": "2024-04-15",
                "valorNominal": "250.00",
                "tipoCobranca": "SIMPLES",
                "situacao": "A_RECEBER",
                "pagador": {
                    "cpfCnpj": "12345678909",
                    "tipoPessoa": "FISICA",
                    "nome": "Maria Souza",
                    "endereco": "Rua das Flores",
                    "cidade": "Belo Horizonte",
                    "uf": "MG",
                    "cep": "30110000"
                }
            },
            "boleto": {
                "nossoNumero": "00012345678",
                "codigoBarras": "07799000000000000000000000000000000000000000",
                "linhaDigitavel": "07790001161200000000000000000000000000000000000"
            }
        })
    }

    #[tokio::test]
    async fn list_walks_pages_with_filter() {
        let client = client();
        client.transport().queue(Ok(json!({
            "totalPaginas": 2,
            "cobrancas": [charge_json("a")]
        })
        .to_string()));
        client.transport().queue(Ok(json!({
            "totalPaginas": 2,
            "cobrancas": [charge_json("b")]
        })
        .to_string()));
        let filter = ChargeFilter::default()
            .with_filter_date_by(FilterDateBy::IssueDate)
            .with_situation(ChargeSituation::AReceber);

        let charges = client.billing().list(&april(), Some(&filter)).await.unwrap();

        let codes: Vec<_> = charges.iter().map(|c| c.charge.request_code.as_str()).collect();
        assert_eq!(codes, vec!["a", "b"]);
        assert!(charges[0].pix.is_none());
        let urls: Vec<_> = client
            .transport()
            .recorded()
            .into_iter()
            .map(|r| r.url)
            .collect();
        insta::assert_snapshot!(urls.join("\n"), @r"
        https://api.test/cobranca/v3/cobrancas?dataInicial=2024-04-01&dataFinal=2024-04-30&filtrarDataPor=EMISSAO&situacao=A_RECEBER&paginacao.paginaAtual=0&paginacao.itensPorPagina=100
        https://api.test/cobranca/v3/cobrancas?dataInicial=2024-04-01&dataFinal=2024-04-30&filtrarDataPor=EMISSAO&situacao=A_RECEBER&paginacao.paginaAtual=1&paginacao.itensPorPagina=100
        ");
    }

    #[tokio::test]
    async fn issue_returns_request_code() {
        let client = client();
        client
            .transport()
            .queue(Ok(json!({"codigoSolicitacao": "5f0e1c"}).to_string()));
        let charge = NewCharge {
            your_number: "0001".to_string(),
            amount: 250.0,
            due_date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
            days_payable_after_due: 0,
            payer: Payer {
                document: "12345678909".to_string(),
                person_type: PersonType::Fisica,
                name: "Maria Souza".to_string(),
                address: "Rua das Flores".to_string(),
                number: None,
                complement: None,
                neighborhood: None,
                city: "Belo Horizonte".to_string(),
                state: "MG".to_string(),
                zip_code: "30110000".to_string(),
                email: None,
                ddd: None,
                phone: None,
            },
            message: None,
        };

        let issued = client.billing().issue(&charge).await.unwrap();

        assert_eq!(issued.request_code, "5f0e1c");
        let recorded = client.transport().recorded();
        assert_eq!(recorded[0].url, "https://api.test/cobranca/v3/cobrancas");
        assert_eq!(recorded[0].scope, Scope::BillingWrite);
        assert!(!recorded[0].body.as_deref().unwrap().contains("null"));
    }

    #[tokio::test]
    async fn cancel_posts_reason() {
        let client = client();
        client
            .billing()
            .cancel("5f0e1c", "ACERTOS")
            .await
            .unwrap();

        let recorded = client.transport().recorded();
        assert_eq!(recorded[0].method, "POST");
        assert_eq!(
            recorded[0].url,
            "https://api.test/cobranca/v3/cobrancas/5f0e1c/cancelar"
        );
        assert_eq!(
            recorded[0].body.as_deref(),
            Some(r#"{"motivoCancelamento":"ACERTOS"}"#)
        );
    }

    #[tokio::test]
    async fn retrieve_unknown_charge_keeps_upstream_detail() {
        let client = client();
        client.transport().queue(Err(TransportFailure::from_status(
            404,
            r#"{"title":"Cobrança não encontrada","violacoes":[]}"#.to_string(),
        )));

        let err = client.billing().retrieve("missing").await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.detail(),
            Some(&json!({"title": "Cobrança não encontrada", "violacoes": []}))
        );
    }

    #[tokio::test]
    async fn summary_uses_summary_path() {
        let client = client();
        client.transport().queue(Ok(json!([
            {"situacao": "RECEBIDO", "valor": 500.0, "quantidade": 2},
            {"situacao": "A_RECEBER", "valor": 250.0, "quantidade": 1}
        ])
        .to_string()));

        let summary = client.billing().summary(&april(), None).await.unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].situation, ChargeSituation::Recebido);
        assert_eq!(
            client.transport().recorded()[0].url,
            "https://api.test/cobranca/v3/cobrancas/sumario?dataInicial=2024-04-01&dataFinal=2024-04-30"
        );
    }

    #[tokio::test]
    async fn pdf_decodes_document() {
        let client = client();
        client
            .transport()
            .queue(Ok(json!({"pdf": "JVBERi0xLjQK"}).to_string()));

        let bytes = client.billing().pdf("5f0e1c").await.unwrap();

        assert_eq!(bytes, b"%PDF-1.4\n");
        assert_eq!(
            client.transport().recorded()[0].url,
            "https://api.test/cobranca/v3/cobrancas/5f0e1c/pdf"
        );
    }

    #[tokio::test]
    async fn webhook_ignores_scope_id() {
        let client = client();
        let webhooks = client.billing().webhooks();
        webhooks
            .include("anything", "https://hooks.example.com", Scope::BillingWrite)
            .await
            .unwrap();

        let webhook = webhooks.retrieve("other", Scope::BillingRead).await.unwrap();
        assert_eq!(webhook.url, "https://hooks.example.com");
    }

    #[tokio::test]
    async fn list_page_keeps_requested_index() {
        let client = client();
        client.transport().queue(Ok(json!({
            "totalPaginas": 3,
            "totalElementos": 5,
            "cobrancas": [charge_json("last")]
        })
        .to_string()));

        let page = client
            .billing()
            .list_page(&april(), None, 2, 2)
            .await
            .unwrap();

        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_more());
        assert_eq!(page.items[0].charge.request_code, "last");
        assert_eq!(
            client.transport().recorded()[0].url,
            "https://api.test/cobranca/v3/cobrancas?dataInicial=2024-04-01&dataFinal=2024-04-30\
             &paginacao.paginaAtual=2&paginacao.itensPorPagina=2"
        );
    }
}
