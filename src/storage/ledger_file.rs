use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::models::Transaction;
use crate::storage::{deserialize, serialize, Snapshot, Storage, StorageError};

/// A ledger persisted as a delimited text file.
pub struct LedgerFile {
    path: PathBuf,
    delimiter: u8
}

impl LedgerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b','
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temporary_path(&self) -> PathBuf {
        let mut temporary = self.path.clone().into_os_string();
        temporary.push(".tmp");
        PathBuf::from(temporary)
    }

    fn write_temporary(&self, temporary: &Path, transactions: &[Transaction]) -> Result<(), StorageError> {
        let file = File::create(temporary).map_err(|source| StorageError::Unavailable {
            path: self.path.clone(),
            source
        })?;

        let writer = serialize(transactions, BufWriter::new(file), self.delimiter)?;
        let file = writer.into_inner().map_err(|error| StorageError::Io(error.into_error()))?;
        file.sync_all()?;

        Ok(())
    }
}

impl Storage for LedgerFile {
    fn load(&self) -> Result<Snapshot, StorageError> {
        let file = File::open(&self.path).map_err(|source| {
            error!("Error opening ledger file at path: {} | {source}", self.path.display());
            StorageError::Unavailable {
                path: self.path.clone(),
                source
            }
        })?;

        deserialize(BufReader::new(file), self.delimiter)
    }

    /// Writes to a sibling temporary file and renames it over the destination,
    /// so the destination is either fully replaced or left as it was.
    fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        let temporary = self.temporary_path();

        let result = self.write_temporary(&temporary, transactions)
            .and_then(|_| fs::rename(&temporary, &self.path).map_err(StorageError::from));

        if let Err(error) = &result {
            error!("Error saving ledger file at path: {} | {error}", self.path.display());
            let _ = fs::remove_file(&temporary);
        } else {
            debug!("Wrote [{}] records to {}", transactions.len(), self.path.display());
        }

        result
    }
}
