use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unable to open [{}]: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        source: io::Error
    },
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Storage CSV error: {0}")]
    Csv(#[from] csv::Error)
}

/// A line of a ledger file that could not be turned into a transaction.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Malformed record on line [{line}]: {reason}")]
pub struct MalformedRecord {
    pub line: u64,
    pub reason: String
}
