mod errors;
mod ledger;
mod summary;
mod transaction;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

pub use ledger::Ledger;
pub use summary::Summary;
pub use transaction::Transaction;

/// Direction of a transaction. Persisted exactly as `Income` or `Expense`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense
}

impl Display for TransactionKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => formatter.pad("Income"),
            TransactionKind::Expense => formatter.pad("Expense")
        }
    }
}
