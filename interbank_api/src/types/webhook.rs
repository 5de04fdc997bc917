use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::{Page, Paginated};

/// A registered webhook subscription.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Webhook {
    #[serde(rename = "webhookUrl")]
    pub url: String,

    #[serde(rename = "criacao")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug)]
pub(crate) struct WebhookRegistration<'a> {
    #[serde(rename = "webhookUrl")]
    pub url: &'a str,
}

/// One delivery attempt of a webhook notification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WebhookCallback {
    #[serde(rename = "webhookUrl")]
    pub url: String,

    #[serde(rename = "numeroTentativa")]
    pub attempt: u32,

    #[serde(rename = "dataHoraDisparo")]
    pub fired_at: DateTime<Utc>,

    #[serde(rename = "sucesso")]
    pub success: bool,

    #[serde(rename = "httpStatus")]
    pub http_status: Option<u16>,

    #[serde(rename = "mensagemErro")]
    pub error_message: Option<String>,

    /// The notification body that was delivered.
    pub payload: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WebhookCallbackPage {
    #[serde(rename = "totalPaginas")]
    pub total_pages: u32,

    #[serde(rename = "totalElementos", default)]
    pub total_elements: u64,

    #[serde(default)]
    pub data: Vec<WebhookCallback>,
}

impl Paginated for WebhookCallbackPage {
    type Item = WebhookCallback;
    const PAGE_PARAM: &'static str = "pagina";
    const PAGE_SIZE_PARAM: &'static str = "tamanhoPagina";

    fn into_page(self, requested: u32) -> Page<WebhookCallback> {
        Page {
            items: self.data,
            total_pages: self.total_pages,
            current_page: requested,
        }
    }
}
