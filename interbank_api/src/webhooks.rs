//! Webhook subscription lifecycle shared by the banking, billing and PIX
//! families.
//!
//! The remote service is the only source of truth: include, retrieve and
//! delete each map to exactly one request and nothing is cached locally.

use crate::{
    client::Client,
    pagination::Page,
    query::{CallbackFilter, QueryString, TimeRange},
    transport::Transport,
    types::{Webhook, WebhookCallback, WebhookCallbackPage, WebhookRegistration},
    Error, Scope,
};

/// Where a family keeps its webhook resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebhookRoute {
    /// One webhook per banking event type, e.g. `pix-pagamento`.
    Banking,
    /// A single webhook for all charges; the scope id is ignored.
    Billing,
    /// One webhook per PIX key.
    Pix,
}

impl WebhookRoute {
    pub fn path(&self, scope_id: &str) -> String {
        match self {
            WebhookRoute::Banking => format!("/banking/v2/webhooks/{}", scope_id),
            WebhookRoute::Billing => "/cobranca/v3/cobrancas/webhook".to_string(),
            WebhookRoute::Pix => format!("/pix/v2/webhook/{}", scope_id),
        }
    }

    pub fn callbacks_path(&self, scope_id: &str) -> String {
        match self {
            WebhookRoute::Banking => format!("/banking/v2/webhooks/{}/callbacks", scope_id),
            WebhookRoute::Billing => "/cobranca/v3/cobrancas/webhook/callbacks".to_string(),
            WebhookRoute::Pix => "/pix/v2/webhook/callbacks".to_string(),
        }
    }

    /// Scope the upstream API expects for reading this family's webhooks.
    pub fn read_scope(&self) -> Scope {
        match self {
            WebhookRoute::Banking => Scope::BankingWebhookRead,
            WebhookRoute::Billing => Scope::BillingRead,
            WebhookRoute::Pix => Scope::PixWebhookRead,
        }
    }

    /// Scope the upstream API expects for changing this family's webhooks.
    pub fn write_scope(&self) -> Scope {
        match self {
            WebhookRoute::Banking => Scope::BankingWebhookWrite,
            WebhookRoute::Billing => Scope::BillingWrite,
            WebhookRoute::Pix => Scope::PixWebhookWrite,
        }
    }
}

/// Include/retrieve/delete for one family's webhooks.
pub struct WebhookManager<'c, T> {
    client: &'c Client<T>,
    route: WebhookRoute,
}

impl<'c, T: Transport> WebhookManager<'c, T> {
    pub(crate) fn new(client: &'c Client<T>, route: WebhookRoute) -> Self {
        Self { client, route }
    }

    pub fn route(&self) -> WebhookRoute {
        self.route
    }

    /// Registers `url` for `scope_id`, replacing any previous registration.
    pub async fn include(&self, scope_id: &str, url: &str, write_scope: Scope) -> Result<(), Error> {
        tracing::debug!("Including {:?} webhook for {}", self.route, scope_id);
        self.client
            .put_discarding(
                &self.route.path(scope_id),
                write_scope,
                &WebhookRegistration { url },
            )
            .await
    }

    /// Reads the webhook registered for `scope_id`.
    pub async fn retrieve(&self, scope_id: &str, read_scope: Scope) -> Result<Webhook, Error> {
        self.client
            .get(&self.route.path(scope_id), &QueryString::new(), read_scope)
            .await
    }

    /// Removes the webhook registered for `scope_id`.
    pub async fn delete(&self, scope_id: &str, write_scope: Scope) -> Result<(), Error> {
        tracing::debug!("Deleting {:?} webhook for {}", self.route, scope_id);
        self.client
            .delete(&self.route.path(scope_id), write_scope)
            .await
    }

    /// One page of delivery attempts for `scope_id` within `range`.
    pub async fn callbacks_page(
        &self,
        scope_id: &str,
        range: &TimeRange,
        filter: Option<&CallbackFilter>,
        page: u32,
        page_size: u32,
        read_scope: Scope,
    ) -> Result<Page<WebhookCallback>, Error> {
        let query = callbacks_query(range, filter);
        self.client
            .fetch_page::<WebhookCallbackPage>(
                &self.route.callbacks_path(scope_id),
                &query,
                page,
                page_size,
                read_scope,
            )
            .await
    }

    /// Every delivery attempt for `scope_id` within `range`.
    pub async fn callbacks(
        &self,
        scope_id: &str,
        range: &TimeRange,
        filter: Option<&CallbackFilter>,
        read_scope: Scope,
    ) -> Result<Vec<WebhookCallback>, Error> {
        let query = callbacks_query(range, filter);
        self.client
            .fetch_all::<WebhookCallbackPage>(&self.route.callbacks_path(scope_id), &query, read_scope)
            .await
    }
}

fn callbacks_query(range: &TimeRange, filter: Option<&CallbackFilter>) -> QueryString {
    QueryString::new()
        .pair("dataHoraInicio", range.start_str())
        .pair("dataHoraFim", range.end_str())
        .filter(filter)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::transport::testing::FakeTransport;
    use crate::transport::TransportFailure;

    fn client() -> Client<FakeTransport> {
        Client::with_transport(FakeTransport::new(), "https://api.test")
    }

    #[tokio::test]
    async fn include_then_retrieve_returns_included_url() {
        let client = client();
        let webhooks = WebhookManager::new(&client, WebhookRoute::Pix);

        webhooks
            .include("chave@example.com", "https://hooks.example.com/pix", Scope::PixWebhookWrite)
            .await
            .unwrap();
        let webhook = webhooks
            .retrieve("chave@example.com", Scope::PixWebhookRead)
            .await
            .unwrap();

        assert_eq!(webhook.url, "https://hooks.example.com/pix");
        assert!(webhook.created_at.is_none());
    }

    #[tokio::test]
    async fn include_replaces_previous_registration() {
        let client = client();
        let webhooks = WebhookManager::new(&client, WebhookRoute::Banking);

        for url in ["https://a.example.com", "https://b.example.com"] {
            webhooks
                .include("pix-pagamento", url, Scope::BankingWebhookWrite)
                .await
                .unwrap();
        }
        let webhook = webhooks
            .retrieve("pix-pagamento", Scope::BankingWebhookRead)
            .await
            .unwrap();
        assert_eq!(webhook.url, "https://b.example.com");
    }

    #[tokio::test]
    async fn each_operation_sends_one_request() {
        let client = client();
        let webhooks = WebhookManager::new(&client, WebhookRoute::Billing);

        webhooks
            .include("", "https://hooks.example.com/billing", Scope::BillingWrite)
            .await
            .unwrap();
        webhooks.retrieve("", Scope::BillingRead).await.unwrap();
        webhooks.delete("", Scope::BillingWrite).await.unwrap();

        let recorded = client.transport().recorded();
        let calls: Vec<_> = recorded
            .iter()
            .map(|r| (r.method, r.url.as_str(), r.scope))
            .collect();
        assert_eq!(
            calls,
            vec![
                ("PUT", "https://api.test/cobranca/v3/cobrancas/webhook", Scope::BillingWrite),
                ("GET", "https://api.test/cobranca/v3/cobrancas/webhook", Scope::BillingRead),
                ("DELETE", "https://api.test/cobranca/v3/cobrancas/webhook", Scope::BillingWrite),
            ]
        );
        assert_eq!(
            recorded[0].body.as_deref(),
            Some(r#"{"webhookUrl":"https://hooks.example.com/billing"}"#)
        );
    }

    #[tokio::test]
    async fn retrieve_after_delete_fails() {
        let client = client();
        let webhooks = WebhookManager::new(&client, WebhookRoute::Pix);

        webhooks
            .include("key", "https://hooks.example.com", Scope::PixWebhookWrite)
            .await
            .unwrap();
        webhooks.delete("key", Scope::PixWebhookWrite).await.unwrap();

        let err = webhooks.retrieve("key", Scope::PixWebhookRead).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn delete_failure_is_not_special_cased() {
        let client = client();
        client.transport().queue(Err(TransportFailure::from_status(
            404,
            r#"{"title":"Webhook não encontrado"}"#.to_string(),
        )));
        let webhooks = WebhookManager::new(&client, WebhookRoute::Banking);

        let err = webhooks
            .delete("boleto-pagamento", Scope::BankingWebhookWrite)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Request failed with status 404");
        assert_eq!(err.detail(), Some(&json!({"title": "Webhook não encontrado"})));
    }

    #[tokio::test]
    async fn callbacks_use_time_range_and_filter() {
        let client = client();
        client.transport().queue(Ok(json!({
            "totalPaginas": 1,
            "totalElementos": 1,
            "data": [{
                "webhookUrl": "https://hooks.example.com",
                "numeroTentativa": 2,
                "dataHoraDisparo": "2024-05-02T10:15:00Z",
                "sucesso": false,
                "httpStatus": 500,
                "mensagemErro": "Internal Server Error"
            }]
        })
        .to_string()));
        let webhooks = WebhookManager::new(&client, WebhookRoute::Pix);
        let range = TimeRange::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 3, 0, 0, 0).unwrap(),
        );
        let filter = CallbackFilter::default().with_txid("tx123");

        let callbacks = webhooks
            .callbacks("ignored", &range, Some(&filter), Scope::PixWebhookRead)
            .await
            .unwrap();

        assert_eq!(callbacks.len(), 1);
        assert_eq!(callbacks[0].attempt, 2);
        assert!(!callbacks[0].success);
        assert_eq!(
            client.transport().recorded()[0].url,
            "https://api.test/pix/v2/webhook/callbacks?dataHoraInicio=2024-05-01T00:00:00Z\
             &dataHoraFim=2024-05-03T00:00:00Z&txid=tx123&pagina=0&tamanhoPagina=100"
        );
    }

    #[tokio::test]
    async fn callbacks_page_passes_index_and_size() {
        let client = client();
        client.transport().queue(Ok(json!({
            "totalPaginas": 2,
            "data": []
        })
        .to_string()));
        let webhooks = WebhookManager::new(&client, WebhookRoute::Pix);
        let range = TimeRange::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap(),
        );

        let page = webhooks
            .callbacks_page("ignored", &range, None, 1, 20, Scope::PixWebhookRead)
            .await
            .unwrap();

        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_more());
        assert_eq!(
            client.transport().recorded()[0].url,
            "https://api.test/pix/v2/webhook/callbacks?dataHoraInicio=2024-05-01T00:00:00Z\
             &dataHoraFim=2024-05-02T00:00:00Z&pagina=1&tamanhoPagina=20"
        );
    }
}
