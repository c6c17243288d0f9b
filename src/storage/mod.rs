mod codec;
mod errors;
mod ledger_file;

use crate::models::Transaction;

pub use codec::{deserialize, serialize};
pub use errors::{MalformedRecord, StorageError};
pub use ledger_file::LedgerFile;

/// The outcome of reading a ledger source: every record that parsed, in
/// source order, plus the ones that were skipped.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<MalformedRecord>
}

pub trait Storage {
    fn load(&self) -> Result<Snapshot, StorageError>;
    fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError>;
}
