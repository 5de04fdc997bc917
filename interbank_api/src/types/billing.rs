use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pagination::{Page, Paginated};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeSituation {
    Recebido,
    AReceber,
    MarcadoRecebido,
    Atrasado,
    Cancelado,
    Expirado,
    FalhaEmissao,
    EmProcessamento,
    Protesto,
}

impl std::fmt::Display for ChargeSituation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ChargeSituation::Recebido => "RECEBIDO",
                ChargeSituation::AReceber => "A_RECEBER",
                ChargeSituation::MarcadoRecebido => "MARCADO_RECEBIDO",
                ChargeSituation::Atrasado => "ATRASADO",
                ChargeSituation::Cancelado => "CANCELADO",
                ChargeSituation::Expirado => "EXPIRADO",
                ChargeSituation::FalhaEmissao => "FALHA_EMISSAO",
                ChargeSituation::EmProcessamento => "EM_PROCESSAMENTO",
                ChargeSituation::Protesto => "PROTESTO",
            }
        )
    }
}

impl std::str::FromStr for ChargeSituation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "RECEBIDO" => Ok(ChargeSituation::Recebido),
            "A_RECEBER" => Ok(ChargeSituation::AReceber),
            "MARCADO_RECEBIDO" => Ok(ChargeSituation::MarcadoRecebido),
            "ATRASADO" => Ok(ChargeSituation::Atrasado),
            "CANCELADO" => Ok(ChargeSituation::Cancelado),
            "EXPIRADO" => Ok(ChargeSituation::Expirado),
            "FALHA_EMISSAO" => Ok(ChargeSituation::FalhaEmissao),
            "EM_PROCESSAMENTO" => Ok(ChargeSituation::EmProcessamento),
            "PROTESTO" => Ok(ChargeSituation::Protesto),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeType {
    Simples,
    Parcelado,
    Recorrente,
}

impl std::fmt::Display for ChargeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ChargeType::Simples => "SIMPLES",
                ChargeType::Parcelado => "PARCELADO",
                ChargeType::Recorrente => "RECORRENTE",
            }
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonType {
    Fisica,
    Juridica,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Payer {
    #[serde(rename = "cpfCnpj")]
    pub document: String,

    #[serde(rename = "tipoPessoa")]
    pub person_type: PersonType,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "endereco")]
    pub address: String,

    #[serde(rename = "numero")]
    pub number: Option<String>,

    #[serde(rename = "complemento")]
    pub complement: Option<String>,

    #[serde(rename = "bairro")]
    pub neighborhood: Option<String>,

    #[serde(rename = "cidade")]
    pub city: String,

    #[serde(rename = "uf")]
    pub state: String,

    #[serde(rename = "cep")]
    pub zip_code: String,

    pub email: Option<String>,

    pub ddd: Option<String>,

    #[serde(rename = "telefone")]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ChargeMessage {
    pub linha1: Option<String>,
    pub linha2: Option<String>,
    pub linha3: Option<String>,
    pub linha4: Option<String>,
    pub linha5: Option<String>,
}

/// Request to issue a new charge (boleto with PIX).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewCharge {
    /// Caller-assigned identifier, echoed back in listings.
    #[serde(rename = "seuNumero")]
    pub your_number: String,

    #[serde(rename = "valorNominal")]
    pub amount: f64,

    #[serde(rename = "dataVencimento")]
    pub due_date: NaiveDate,

    /// Days after the due date the charge stays payable.
    #[serde(rename = "numDiasAgenda")]
    pub days_payable_after_due: u32,

    #[serde(rename = "pagador")]
    pub payer: Payer,

    #[serde(rename = "mensagem")]
    pub message: Option<ChargeMessage>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IssuedCharge {
    #[serde(rename = "codigoSolicitacao")]
    pub request_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Charge {
    #[serde(rename = "codigoSolicitacao")]
    pub request_code: String,

    #[serde(rename = "seuNumero")]
    pub your_number: String,

    #[serde(rename = "dataEmissao")]
    pub issue_date: NaiveDate,

    #[serde(rename = "dataVencimento")]
    pub due_date: NaiveDate,

    #[serde(rename = "valorNominal")]
    pub amount: String,

    #[serde(rename = "tipoCobranca")]
    pub charge_type: ChargeType,

    #[serde(rename = "situacao")]
    pub situation: ChargeSituation,

    #[serde(rename = "dataSituacao")]
    pub situation_date: Option<NaiveDate>,

    #[serde(rename = "valorTotalRecebido")]
    pub total_received: Option<String>,

    #[serde(rename = "origemRecebimento")]
    pub received_via: Option<String>,

    #[serde(rename = "pagador")]
    pub payer: Payer,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Boleto {
    #[serde(rename = "nossoNumero")]
    pub our_number: String,

    #[serde(rename = "codigoBarras")]
    pub barcode: String,

    #[serde(rename = "linhaDigitavel")]
    pub typeable_line: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChargePix {
    pub txid: String,

    #[serde(rename = "pixCopiaECola")]
    pub copy_paste: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChargeDetail {
    #[serde(rename = "cobranca")]
    pub charge: Charge,

    pub boleto: Option<Boleto>,

    pub pix: Option<ChargePix>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChargePage {
    #[serde(rename = "totalPaginas")]
    pub total_pages: u32,

    #[serde(rename = "totalElementos", default)]
    pub total_elements: u64,

    #[serde(rename = "cobrancas", default)]
    pub charges: Vec<ChargeDetail>,
}

impl Paginated for ChargePage {
    type Item = ChargeDetail;
    const PAGE_PARAM: &'static str = "paginacao.paginaAtual";
    const PAGE_SIZE_PARAM: &'static str = "paginacao.itensPorPagina";

    fn into_page(self, requested: u32) -> Page<ChargeDetail> {
        Page {
            items: self.charges,
            total_pages: self.total_pages,
            current_page: requested,
        }
    }
}

/// Totals per situation over a date range.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChargeSummary {
    #[serde(rename = "situacao")]
    pub situation: ChargeSituation,

    #[serde(rename = "valor")]
    pub amount: f64,

    #[serde(rename = "quantidade")]
    pub count: u64,
}

#[derive(Serialize, Debug, Clone)]
pub(crate) struct CancelCharge<'a> {
    #[serde(rename = "motivoCancelamento")]
    pub reason: &'a str,
}
