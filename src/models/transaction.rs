use serde::{Deserialize, Serialize};

use crate::models::TransactionKind;
use crate::types::Monetary;

/// A single recorded income or expense.
///
/// Field order matches the column order of the ledger file:
/// `kind,category,amount`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    kind: TransactionKind,
    category: String,
    amount: Monetary
}

impl Transaction {
    pub(crate) fn new(kind: TransactionKind, category: impl Into<String>, amount: Monetary) -> Self {
        Self {
            kind,
            category: category.into(),
            amount
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Monetary {
        self.amount
    }
}
