use crate::types::PixChargeStatus;

use super::common::{format_flag, Filter};

/// Narrows the immediate charge listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PixChargeFilter {
    pub cpf: Option<String>,
    pub cnpj: Option<String>,
    pub location_present: Option<bool>,
    pub status: Option<PixChargeStatus>,
}

impl Filter for PixChargeFilter {
    fn fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("cpf", self.cpf.clone()),
            ("cnpj", self.cnpj.clone()),
            (
                "locationPresente",
                self.location_present.map(|f| format_flag(f).to_string()),
            ),
            ("status", self.status.map(|s| s.to_string())),
        ]
    }
}

impl PixChargeFilter {
    pub fn with_cpf(mut self, cpf: &str) -> Self {
        self.cpf = Some(cpf.to_string());
        self
    }

    pub fn with_cnpj(mut self, cnpj: &str) -> Self {
        self.cnpj = Some(cnpj.to_string());
        self
    }

    pub fn with_location_present(mut self, present: bool) -> Self {
        self.location_present = Some(present);
        self
    }

    pub fn with_status(mut self, status: PixChargeStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Narrows the received PIX listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReceivedPixFilter {
    pub txid: Option<String>,
    pub txid_present: Option<bool>,
    pub devolution_present: Option<bool>,
    pub cpf: Option<String>,
    pub cnpj: Option<String>,
}

impl Filter for ReceivedPixFilter {
    fn fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("txid", self.txid.clone()),
            (
                "txIdPresente",
                self.txid_present.map(|f| format_flag(f).to_string()),
            ),
            (
                "devolucaoPresente",
                self.devolution_present.map(|f| format_flag(f).to_string()),
            ),
            ("cpf", self.cpf.clone()),
            ("cnpj", self.cnpj.clone()),
        ]
    }
}

impl ReceivedPixFilter {
    pub fn with_txid(mut self, txid: &str) -> Self {
        self.txid = Some(txid.to_string());
        self
    }

    pub fn with_txid_present(mut self, present: bool) -> Self {
        self.txid_present = Some(present);
        self
    }

    pub fn with_devolution_present(mut self, present: bool) -> Self {
        self.devolution_present = Some(present);
        self
    }

    pub fn with_cpf(mut self, cpf: &str) -> Self {
        self.cpf = Some(cpf.to_string());
        self
    }

    pub fn with_cnpj(mut self, cnpj: &str) -> Self {
        self.cnpj = Some(cnpj.to_string());
        self
    }
}
