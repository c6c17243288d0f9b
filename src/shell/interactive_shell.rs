use std::io;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use crate::engine::{dispatch, Command, Settings};
use crate::models::Ledger;
use crate::types::Monetary;

const MENU: &str = "\n--- Personal Budget Manager ---\n\
                    1. Add Income\n\
                    2. Add Expense\n\
                    3. View Summary\n\
                    4. Save to File\n\
                    5. Load from File\n\
                    6. Exit";

enum Input {
    Command(Command),
    Invalid(&'static str),
    Closed
}

/// Menu-driven front end that turns prompted lines into [`Command`]s.
///
/// Works over any line source and sink so sessions can be scripted.
pub struct InteractiveShell<R, W> {
    input: R,
    output: W,
    settings: Settings
}

impl<R: BufRead, W: Write> InteractiveShell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            settings: Settings::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.settings.delimiter = delimiter;
        self
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the user exits or the input is exhausted.
    pub fn run(&mut self, ledger: &mut Ledger) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;

            let command = match self.read_command()? {
                Input::Command(command) => command,
                Input::Invalid(message) => {
                    writeln!(self.output, "{message}")?;
                    continue;
                }
                Input::Closed => {
                    debug!("Input closed, leaving the menu loop");
                    break;
                }
            };

            let response = dispatch(ledger, &self.settings, command);
            writeln!(self.output, "{}", response.output)?;

            if response.exit {
                break;
            }
        }

        self.output.flush()
    }

    fn read_command(&mut self) -> io::Result<Input> {
        let Some(choice) = self.prompt("Enter your choice: ")? else {
            return Ok(Input::Closed)
        };

        let input = match choice.as_str() {
            "1" => self.read_transaction("income")?.map(|(category, amount)| Command::AddIncome { category, amount }),
            "2" => self.read_transaction("expense")?.map(|(category, amount)| Command::AddExpense { category, amount }),
            "3" => Ok(Command::ViewSummary),
            "4" => self.read_path("Enter filename to save transactions: ")?.map(|path| Command::Save { path }),
            "5" => self.read_path("Enter filename to load transactions: ")?.map(|path| Command::Load { path }),
            "6" => Ok(Command::Exit),
            _ => Err(Input::Invalid("Invalid choice. Please try again."))
        };

        Ok(match input {
            Ok(command) => Input::Command(command),
            Err(input) => input
        })
    }

    fn read_transaction(&mut self, label: &str) -> io::Result<Result<(String, Monetary), Input>> {
        let Some(category) = self.prompt(&format!("Enter category for {label}: "))? else {
            return Ok(Err(Input::Closed))
        };

        let Some(amount) = self.prompt("Enter amount: ")? else {
            return Ok(Err(Input::Closed))
        };

        match Monetary::from_str(&amount) {
            Ok(amount) => Ok(Ok((category, amount))),
            Err(error) => {
                debug!("Rejected amount input: {error}");
                Ok(Err(Input::Invalid("Invalid amount. Please enter a number.")))
            }
        }
    }

    fn read_path(&mut self, text: &str) -> io::Result<Result<PathBuf, Input>> {
        match self.prompt(text)? {
            Some(path) if path.is_empty() => Ok(Err(Input::Invalid("Filename cannot be empty."))),
            Some(path) => Ok(Ok(PathBuf::from(path))),
            None => Ok(Err(Input::Closed))
        }
    }

    /// Writes `text` and reads one trimmed line, or `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None)
        }

        Ok(Some(line.trim().to_string()))
    }
}
