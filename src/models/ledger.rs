use tracing::{debug, info, warn};

use crate::models::errors::LedgerError;
use crate::models::{Summary, Transaction, TransactionKind};
use crate::storage::{MalformedRecord, Storage, StorageError};
use crate::types::Monetary;

/// The in-memory, insertion-ordered record of every transaction.
///
/// The ledger only grows through [`Ledger::add`] or is replaced wholesale by
/// [`Ledger::load`]; there is no edit or delete.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new()
        }
    }

    /// Appends a new transaction to the end of the ledger.
    ///
    /// # Errors
    /// Returns `LedgerError::InvalidAmount` if `amount` is zero or negative, in
    /// which case the ledger is left untouched.
    pub fn add(&mut self, kind: TransactionKind, category: impl Into<String>, amount: Monetary) -> Result<(), LedgerError> {
        let category = category.into();

        if !amount.is_positive() {
            warn!("Rejected [{kind}] transaction [{category}] with non-positive amount [{amount}]");
            return Err(LedgerError::InvalidAmount { kind, category, amount })
        }

        info!("Recorded [{kind}] transaction [{category}] for [{amount}]");
        self.transactions.push(Transaction::new(kind, category, amount));

        Ok(())
    }

    /// Computes income, expense and net totals in a single pass.
    pub fn summarize(&self) -> Summary<'_> {
        Summary::from_rows(&self.transactions)
    }

    #[cfg(test)]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Persists every transaction through `storage`. The ledger is never modified.
    pub fn save<S: Storage>(&self, storage: &S) -> Result<(), StorageError> {
        storage.save(&self.transactions)?;
        info!("Saved [{}] transactions", self.transactions.len());

        Ok(())
    }

    /// Replaces the ledger contents with the transactions read from `storage`.
    ///
    /// Malformed records are skipped and returned so the caller can report them.
    ///
    /// # Errors
    /// Returns `StorageError` if the source cannot be opened or read; the
    /// ledger keeps its previous contents in that case.
    pub fn load<S: Storage>(&mut self, storage: &S) -> Result<Vec<MalformedRecord>, StorageError> {
        let snapshot = storage.load()?;

        debug!("Replacing [{}] transactions with [{}] loaded ones", self.transactions.len(), snapshot.transactions.len());
        self.transactions = snapshot.transactions;

        info!("Loaded [{}] transactions, skipped [{}] malformed records", self.transactions.len(), snapshot.skipped.len());

        Ok(snapshot.skipped)
    }
}
