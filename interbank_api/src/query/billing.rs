use std::str::FromStr;

use crate::types::{ChargeSituation, ChargeType};

use super::common::{Filter, SortDirection};

/// Which date the charge listing range applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterDateBy {
    #[default]
    DueDate,
    IssueDate,
    PaymentDate,
}

impl std::fmt::Display for FilterDateBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FilterDateBy::DueDate => "VENCIMENTO",
                FilterDateBy::IssueDate => "EMISSAO",
                FilterDateBy::PaymentDate => "PAGAMENTO",
            }
        )
    }
}

impl FromStr for FilterDateBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "due" => Ok(FilterDateBy::DueDate),
            "issue" => Ok(FilterDateBy::IssueDate),
            "payment" => Ok(FilterDateBy::PaymentDate),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChargeSortBy {
    Payer,
    ChargeType,
    RequestCode,
    YourNumber,
    IssueDate,
    #[default]
    DueDate,
    Amount,
    Situation,
}

impl std::fmt::Display for ChargeSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ChargeSortBy::Payer => "PESSOA_PAGADORA",
                ChargeSortBy::ChargeType => "TIPO_COBRANCA",
                ChargeSortBy::RequestCode => "CODIGO_COBRANCA",
                ChargeSortBy::YourNumber => "IDENTIFICADOR",
                ChargeSortBy::IssueDate => "DATA_EMISSAO",
                ChargeSortBy::DueDate => "DATA_VENCIMENTO",
                ChargeSortBy::Amount => "VALOR",
                ChargeSortBy::Situation => "STATUS",
            }
        )
    }
}

impl FromStr for ChargeSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "payer" => Ok(ChargeSortBy::Payer),
            "type" => Ok(ChargeSortBy::ChargeType),
            "code" => Ok(ChargeSortBy::RequestCode),
            "your-number" => Ok(ChargeSortBy::YourNumber),
            "issue-date" => Ok(ChargeSortBy::IssueDate),
            "due-date" => Ok(ChargeSortBy::DueDate),
            "amount" => Ok(ChargeSortBy::Amount),
            "situation" => Ok(ChargeSortBy::Situation),
            _ => Err(()),
        }
    }
}

/// Narrows the charge listing and summary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChargeFilter {
    pub filter_date_by: Option<FilterDateBy>,
    pub situation: Option<ChargeSituation>,
    pub payer: Option<String>,
    pub payer_document: Option<String>,
    pub your_number: Option<String>,
    pub charge_type: Option<ChargeType>,
    pub sort_by: Option<ChargeSortBy>,
    pub sort_direction: Option<SortDirection>,
}

impl Filter for ChargeFilter {
    fn fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("filtrarDataPor", self.filter_date_by.map(|f| f.to_string())),
            ("situacao", self.situation.map(|s| s.to_string())),
            ("pessoaPagadora", self.payer.clone()),
            ("cpfCnpjPessoaPagadora", self.payer_document.clone()),
            ("seuNumero", self.your_number.clone()),
            ("tipoCobranca", self.charge_type.map(|t| t.to_string())),
            ("ordenarPor", self.sort_by.map(|s| s.to_string())),
            ("tipoOrdenacao", self.sort_direction.map(|d| d.to_string())),
        ]
    }
}

impl ChargeFilter {
    pub fn with_filter_date_by(mut self, filter_date_by: FilterDateBy) -> Self {
        self.filter_date_by = Some(filter_date_by);
        self
    }

    pub fn with_situation(mut self, situation: ChargeSituation) -> Self {
        self.situation = Some(situation);
        self
    }

    pub fn with_payer(mut self, payer: &str) -> Self {
        self.payer = Some(payer.to_string());
        self
    }

    pub fn with_payer_document(mut self, document: &str) -> Self {
        self.payer_document = Some(document.to_string());
        self
    }

    pub fn with_your_number(mut self, your_number: &str) -> Self {
        self.your_number = Some(your_number.to_string());
        self
    }

    pub fn with_charge_type(mut self, charge_type: ChargeType) -> Self {
        self.charge_type = Some(charge_type);
        self
    }

    pub fn with_sort_by(mut self, sort_by: ChargeSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self {
        self.sort_direction = Some(sort_direction);
        self
    }
}
