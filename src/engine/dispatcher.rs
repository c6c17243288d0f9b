use std::path::PathBuf;

use tracing::debug;

use crate::models::{Ledger, TransactionKind};
use crate::storage::LedgerFile;
use crate::types::Monetary;

/// A user request, already parsed into the types the ledger expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddIncome {
        category: String,
        amount: Monetary
    },
    AddExpense {
        category: String,
        amount: Monetary
    },
    ViewSummary,
    Save {
        path: PathBuf
    },
    Load {
        path: PathBuf
    },
    Exit
}

/// Options shared by every command of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Field delimiter of saved and loaded ledger files.
    pub delimiter: u8
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: b','
        }
    }
}

/// Rendered result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub output: String,
    /// Set once the session should end.
    pub exit: bool
}

impl Response {
    fn proceed(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            exit: false
        }
    }

    fn exit(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            exit: true
        }
    }
}

/// Applies `command` to `ledger` and renders the outcome.
///
/// Every failure is turned into a user-facing message; nothing here is fatal.
pub fn dispatch(ledger: &mut Ledger, settings: &Settings, command: Command) -> Response {
    debug!("Dispatching {command:?}");

    match command {
        Command::AddIncome { category, amount } => add(ledger, TransactionKind::Income, category, amount),
        Command::AddExpense { category, amount } => add(ledger, TransactionKind::Expense, category, amount),
        Command::ViewSummary => Response::proceed(ledger.summarize().to_string()),
        Command::Save { path } => save(ledger, LedgerFile::new(path).with_delimiter(settings.delimiter)),
        Command::Load { path } => load(ledger, LedgerFile::new(path).with_delimiter(settings.delimiter)),
        Command::Exit => Response::exit("Exiting program. Goodbye!")
    }
}

fn add(ledger: &mut Ledger, kind: TransactionKind, category: String, amount: Monetary) -> Response {
    match ledger.add(kind, category, amount) {
        Ok(_) => Response::proceed("Transaction added successfully!"),
        Err(error) => Response::proceed(format!("Error: {error}"))
    }
}

fn save(ledger: &Ledger, storage: LedgerFile) -> Response {
    match ledger.save(&storage) {
        Ok(_) => Response::proceed(format!("Transactions saved to {}", storage.path().display())),
        Err(error) => Response::proceed(format!("Error: Unable to save transactions! {error}"))
    }
}

fn load(ledger: &mut Ledger, storage: LedgerFile) -> Response {
    match ledger.load(&storage) {
        Ok(skipped) => {
            let mut output = format!("Transactions loaded from {}", storage.path().display());

            if !skipped.is_empty() {
                output.push_str(&format!("\nSkipped {} malformed record(s):", skipped.len()));

                for record in &skipped {
                    output.push_str(&format!("\n  {record}"));
                }
            }

            Response::proceed(output)
        }
        Err(error) => Response::proceed(format!("Error: Unable to load transactions! {error}"))
    }
}
