use std::io;
use std::io::{Read, Write};

use csv::{ErrorKind, Position, QuoteStyle, ReaderBuilder, Trim, WriterBuilder};
use tracing::{debug, warn};

use crate::models::Transaction;
use crate::storage::{MalformedRecord, Snapshot, StorageError};

const FIELD_COUNT: usize = 3;

/// Writes one `kind,category,amount` record per transaction, in order.
///
/// Fields containing the delimiter, a quote or a line break are quoted, so any
/// category survives a round trip. Returns the underlying writer once flushed.
pub fn serialize<W: Write>(transactions: &[Transaction], writer: W, delimiter: u8) -> Result<W, StorageError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    for transaction in transactions {
        writer.serialize(transaction)?;
    }

    writer.flush()?;
    writer.into_inner().map_err(|error| StorageError::Io(io::Error::new(error.error().kind(), error.to_string())))
}

/// Reads `kind,category,amount` records, skipping (and reporting) any line that
/// does not parse. Only I/O failures abort the read.
pub fn deserialize<R: Read>(reader: R, delimiter: u8) -> Result<Snapshot, StorageError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut snapshot = Snapshot::default();

    for (index, result) in reader.records().enumerate() {
        let fallback_line = index as u64 + 1;

        let record = match result {
            Ok(record) => record,
            Err(error) if error.is_io_error() => return Err(error.into()),
            Err(error) => {
                let line = error.position().map(Position::line).unwrap_or(fallback_line);
                skip(&mut snapshot, line, error.to_string());
                continue;
            }
        };

        let line = record.position().map(Position::line).unwrap_or(fallback_line);

        if record.iter().all(str::is_empty) {
            debug!("Ignoring blank record on line [{line}]");
            continue;
        }

        if record.len() != FIELD_COUNT {
            skip(&mut snapshot, line, format!("expected {FIELD_COUNT} fields, found {}", record.len()));
            continue;
        }

        match record.deserialize::<Transaction>(None) {
            Ok(transaction) => snapshot.transactions.push(transaction),
            Err(error) => {
                let reason = match error.kind() {
                    ErrorKind::Deserialize { err, .. } => err.to_string(),
                    _ => error.to_string()
                };
                skip(&mut snapshot, line, reason);
            }
        }
    }

    Ok(snapshot)
}

fn skip(snapshot: &mut Snapshot, line: u64, reason: String) {
    let malformed = MalformedRecord { line, reason };
    warn!("{malformed}");
    snapshot.skipped.push(malformed);
}
