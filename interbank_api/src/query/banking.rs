use crate::types::{OperationType, TransactionType};

use super::common::Filter;

/// Narrows the enriched statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatementFilter {
    pub operation_type: Option<OperationType>,
    pub transaction_type: Option<TransactionType>,
}

impl Filter for StatementFilter {
    fn fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("tipoOperacao", self.operation_type.map(|t| t.to_string())),
            ("tipoTransacao", self.transaction_type.map(|t| t.to_string())),
        ]
    }
}

impl StatementFilter {
    pub fn with_operation_type(mut self, operation_type: OperationType) -> Self {
        self.operation_type = Some(operation_type);
        self
    }

    pub fn with_transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::encode;

    #[test]
    fn test_statement_filter() {
        assert_eq!(encode(Some(&StatementFilter::default())), "");

        let filter = StatementFilter::default().with_operation_type(OperationType::Credit);
        assert_eq!(encode(Some(&filter)), "&tipoOperacao=C");

        let filter = StatementFilter::default()
            .with_transaction_type(TransactionType::BoletoCobranca)
            .with_operation_type(OperationType::Debit);
        assert_eq!(
            encode(Some(&filter)),
            "&tipoOperacao=D&tipoTransacao=BOLETO_COBRANCA"
        );
    }
}
