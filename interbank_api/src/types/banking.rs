use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pagination::{Page, Paginated};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Balance {
    #[serde(rename = "disponivel")]
    pub available: f64,

    #[serde(rename = "bloqueadoCheque", default)]
    pub blocked_check: f64,

    #[serde(rename = "bloqueadoJudicialmente", default)]
    pub blocked_judicially: f64,

    #[serde(rename = "bloqueadoAdministrativo", default)]
    pub blocked_administratively: f64,

    #[serde(rename = "limite", default)]
    pub limit: f64,
}

/// Debit or credit.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationType {
    #[serde(rename = "D")]
    Debit,
    #[serde(rename = "C")]
    Credit,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OperationType::Debit => "D",
                OperationType::Credit => "C",
            }
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Pix,
    Cambio,
    Estorno,
    Investimento,
    Transferencia,
    Pagamento,
    BoletoCobranca,
    Outros,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransactionType::Pix => "PIX",
                TransactionType::Cambio => "CAMBIO",
                TransactionType::Estorno => "ESTORNO",
                TransactionType::Investimento => "INVESTIMENTO",
                TransactionType::Transferencia => "TRANSFERENCIA",
                TransactionType::Pagamento => "PAGAMENTO",
                TransactionType::BoletoCobranca => "BOLETO_COBRANCA",
                TransactionType::Outros => "OUTROS",
            }
        )
    }
}

impl std::str::FromStr for TransactionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "PIX" => Ok(TransactionType::Pix),
            "CAMBIO" => Ok(TransactionType::Cambio),
            "ESTORNO" => Ok(TransactionType::Estorno),
            "INVESTIMENTO" => Ok(TransactionType::Investimento),
            "TRANSFERENCIA" => Ok(TransactionType::Transferencia),
            "PAGAMENTO" => Ok(TransactionType::Pagamento),
            "BOLETO_COBRANCA" => Ok(TransactionType::BoletoCobranca),
            "OUTROS" => Ok(TransactionType::Outros),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Statement {
    #[serde(rename = "transacoes")]
    pub entries: Vec<StatementEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatementEntry {
    #[serde(rename = "dataEntrada")]
    pub entry_date: NaiveDate,

    #[serde(rename = "tipoTransacao")]
    pub transaction_type: String,

    #[serde(rename = "tipoOperacao")]
    pub operation_type: OperationType,

    /// Amount as a decimal string, e.g. `"150.25"`.
    #[serde(rename = "valor")]
    pub amount: String,

    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "descricao")]
    pub description: String,
}

/// Statement entry with the per-type details the enriched statement adds.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Transaction {
    #[serde(rename = "idTransacao")]
    pub id: Option<String>,

    #[serde(rename = "dataTransacao")]
    pub transaction_date: NaiveDate,

    #[serde(rename = "dataInclusao")]
    pub inclusion_date: Option<String>,

    #[serde(rename = "tipoTransacao")]
    pub transaction_type: String,

    #[serde(rename = "tipoOperacao")]
    pub operation_type: OperationType,

    #[serde(rename = "valor")]
    pub amount: String,

    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "descricao")]
    pub description: String,

    /// Type-specific details, passed through untouched.
    #[serde(rename = "detalhes")]
    pub details: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EnrichedStatementPage {
    #[serde(rename = "totalPaginas")]
    pub total_pages: u32,

    #[serde(rename = "numeroDaPagina", default)]
    pub page_number: Option<u32>,

    #[serde(rename = "totalElementos", default)]
    pub total_elements: u64,

    #[serde(rename = "transacoes", default)]
    pub transactions: Vec<Transaction>,
}

impl Paginated for EnrichedStatementPage {
    type Item = Transaction;
    const PAGE_PARAM: &'static str = "pagina";
    const PAGE_SIZE_PARAM: &'static str = "tamanhoPagina";

    fn into_page(self, requested: u32) -> Page<Transaction> {
        Page {
            items: self.transactions,
            total_pages: self.total_pages,
            current_page: self.page_number.unwrap_or(requested),
        }
    }
}

/// Request to pay a boleto from the account.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BoletoPayment {
    /// Barcode or typeable line.
    #[serde(rename = "codBarraLinhaDigitavel")]
    pub barcode: String,

    #[serde(rename = "valorPagar")]
    pub amount: f64,

    /// Scheduling date. `None` pays today.
    #[serde(rename = "dataPagamento")]
    pub payment_date: Option<NaiveDate>,

    #[serde(rename = "dataVencimento")]
    pub due_date: Option<NaiveDate>,

    #[serde(rename = "cpfCnpjBeneficiario")]
    pub beneficiary_document: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BoletoPaymentReceipt {
    #[serde(rename = "codigoTransacao")]
    pub transaction_code: String,

    #[serde(rename = "statusPagamento")]
    pub status: String,

    #[serde(rename = "dataAgendamento")]
    pub scheduled_date: Option<NaiveDate>,

    #[serde(rename = "quantidadeAprovadores")]
    pub approvers: Option<u32>,
}
