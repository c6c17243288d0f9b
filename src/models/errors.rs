use crate::models::TransactionKind;
use crate::types::Monetary;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Amount must be positive for [{kind}] transaction [{category}], got [{amount}]")]
    InvalidAmount {
        kind: TransactionKind,
        category: String,
        amount: Monetary
    }
}
