use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::{Page, Paginated};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PixChargeStatus {
    Ativa,
    Concluida,
    RemovidaPeloUsuarioRecebedor,
    RemovidaPeloPsp,
}

impl std::fmt::Display for PixChargeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PixChargeStatus::Ativa => "ATIVA",
                PixChargeStatus::Concluida => "CONCLUIDA",
                PixChargeStatus::RemovidaPeloUsuarioRecebedor => "REMOVIDA_PELO_USUARIO_RECEBEDOR",
                PixChargeStatus::RemovidaPeloPsp => "REMOVIDA_PELO_PSP",
            }
        )
    }
}

impl std::str::FromStr for PixChargeStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "ATIVA" => Ok(PixChargeStatus::Ativa),
            "CONCLUIDA" => Ok(PixChargeStatus::Concluida),
            "REMOVIDA_PELO_USUARIO_RECEBEDOR" => Ok(PixChargeStatus::RemovidaPeloUsuarioRecebedor),
            "REMOVIDA_PELO_PSP" => Ok(PixChargeStatus::RemovidaPeloPsp),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Calendar {
    #[serde(rename = "criacao", skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Seconds the charge stays payable after creation.
    #[serde(rename = "expiracao")]
    pub expiration: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Debtor {
    pub cpf: Option<String>,

    pub cnpj: Option<String>,

    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PixAmount {
    /// Decimal string with two places, e.g. `"37.00"`.
    pub original: String,

    /// `1` allows the payer to change the amount.
    #[serde(rename = "modalidadeAlteracao")]
    pub change_mode: Option<u8>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AdditionalInfo {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "valor")]
    pub value: String,
}

/// Request to create or revise an immediate charge.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NewPixCharge {
    #[serde(rename = "calendario")]
    pub calendar: Calendar,

    #[serde(rename = "devedor")]
    pub debtor: Option<Debtor>,

    #[serde(rename = "valor")]
    pub amount: PixAmount,

    /// PIX key receiving the payment.
    #[serde(rename = "chave")]
    pub key: String,

    #[serde(rename = "solicitacaoPagador")]
    pub payer_request: Option<String>,

    #[serde(rename = "infoAdicionais")]
    pub additional_info: Option<Vec<AdditionalInfo>>,
}

/// Partial update of an existing immediate charge. Unset fields are kept.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PixChargeRevision {
    #[serde(rename = "calendario")]
    pub calendar: Option<Calendar>,

    #[serde(rename = "devedor")]
    pub debtor: Option<Debtor>,

    #[serde(rename = "valor")]
    pub amount: Option<PixAmount>,

    #[serde(rename = "solicitacaoPagador")]
    pub payer_request: Option<String>,

    /// Set to `REMOVIDA_PELO_USUARIO_RECEBEDOR` to cancel the charge.
    pub status: Option<PixChargeStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PixCharge {
    #[serde(rename = "calendario")]
    pub calendar: Calendar,

    pub txid: String,

    #[serde(rename = "revisao", default)]
    pub revision: u32,

    pub status: PixChargeStatus,

    #[serde(rename = "valor")]
    pub amount: PixAmount,

    #[serde(rename = "chave")]
    pub key: String,

    #[serde(rename = "devedor")]
    pub debtor: Option<Debtor>,

    pub location: Option<String>,

    #[serde(rename = "pixCopiaECola")]
    pub copy_paste: Option<String>,

    #[serde(rename = "solicitacaoPagador")]
    pub payer_request: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PixPagination {
    #[serde(rename = "paginaAtual")]
    pub current_page: u32,

    #[serde(rename = "itensPorPagina")]
    pub items_per_page: u32,

    #[serde(rename = "quantidadeDePaginas")]
    pub total_pages: u32,

    #[serde(rename = "quantidadeTotalDeItens")]
    pub total_items: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PixListParameters {
    #[serde(rename = "inicio")]
    pub start: DateTime<Utc>,

    #[serde(rename = "fim")]
    pub end: DateTime<Utc>,

    #[serde(rename = "paginacao")]
    pub pagination: PixPagination,
}

impl PixListParameters {
    fn page<T>(&self, items: Vec<T>) -> Page<T> {
        Page {
            items,
            total_pages: self.pagination.total_pages,
            current_page: self.pagination.current_page,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PixChargePage {
    #[serde(rename = "parametros")]
    pub parameters: PixListParameters,

    #[serde(default)]
    pub cobs: Vec<PixCharge>,
}

impl Paginated for PixChargePage {
    type Item = PixCharge;
    const PAGE_PARAM: &'static str = "paginacao.paginaAtual";
    const PAGE_SIZE_PARAM: &'static str = "paginacao.itensPorPagina";

    fn into_page(self, _requested: u32) -> Page<PixCharge> {
        self.parameters.page(self.cobs)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DevolutionTimes {
    #[serde(rename = "solicitacao")]
    pub requested_at: Option<DateTime<Utc>>,

    #[serde(rename = "liquidacao")]
    pub settled_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Devolution {
    pub id: String,

    #[serde(rename = "rtrId")]
    pub return_id: String,

    #[serde(rename = "valor")]
    pub amount: String,

    #[serde(rename = "horario")]
    pub times: Option<DevolutionTimes>,

    pub status: String,

    #[serde(rename = "motivo")]
    pub reason: Option<String>,
}

/// Request to return (part of) a received PIX.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewDevolution {
    #[serde(rename = "valor")]
    pub amount: String,

    #[serde(rename = "natureza")]
    pub nature: Option<String>,

    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReceivedPix {
    #[serde(rename = "endToEndId")]
    pub end_to_end_id: String,

    pub txid: Option<String>,

    #[serde(rename = "valor")]
    pub amount: String,

    #[serde(rename = "chave")]
    pub key: Option<String>,

    #[serde(rename = "horario")]
    pub received_at: DateTime<Utc>,

    #[serde(rename = "infoPagador")]
    pub payer_info: Option<String>,

    #[serde(rename = "devolucoes", default)]
    pub devolutions: Vec<Devolution>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ReceivedPixPage {
    #[serde(rename = "parametros")]
    pub parameters: PixListParameters,

    #[serde(default)]
    pub pix: Vec<ReceivedPix>,
}

impl Paginated for ReceivedPixPage {
    type Item = ReceivedPix;
    const PAGE_PARAM: &'static str = "paginacao.paginaAtual";
    const PAGE_SIZE_PARAM: &'static str = "paginacao.itensPorPagina";

    fn into_page(self, _requested: u32) -> Page<ReceivedPix> {
        self.parameters.page(self.pix)
    }
}
