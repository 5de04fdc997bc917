use super::common::Filter;

/// Narrows a webhook callback listing to one charge or transaction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallbackFilter {
    pub txid: Option<String>,
    pub request_code: Option<String>,
    pub end_to_end_id: Option<String>,
}

impl Filter for CallbackFilter {
    fn fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("txid", self.txid.clone()),
            ("codigoSolicitacao", self.request_code.clone()),
            ("endToEndId", self.end_to_end_id.clone()),
        ]
    }
}

impl CallbackFilter {
    pub fn with_txid(mut self, txid: &str) -> Self {
        self.txid = Some(txid.to_string());
        self
    }

    pub fn with_request_code(mut self, request_code: &str) -> Self {
        self.request_code = Some(request_code.to_string());
        self
    }

    pub fn with_end_to_end_id(mut self, end_to_end_id: &str) -> Self {
        self.end_to_end_id = Some(end_to_end_id.to_string());
        self
    }
}
