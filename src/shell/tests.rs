use super::InteractiveShell;

use std::fs;
use std::io::Cursor;

use anyhow::Result;
use tempfile::tempdir;

use crate::models::Ledger;

fn run_session(ledger: &mut Ledger, script: &str) -> Result<String> {
    let mut shell = InteractiveShell::new(Cursor::new(script.to_string()), Vec::new());
    shell.run(ledger)?;

    Ok(String::from_utf8(shell.into_output())?)
}

#[test]
fn test_shell_records_transactions_and_prints_summary() -> Result<()> {
    let mut ledger = Ledger::new();
    let output = run_session(&mut ledger, "1\nSalary\n1500\n2\nRent\n500\n2\nFood\n0\n3\n6\n")?;

    assert_eq!(ledger.len(), 2);
    assert_eq!(output.matches("Transaction added successfully!").count(), 2);
    assert!(output.contains("Error: Amount must be positive"));
    assert!(output.contains("Net Savings: $1000.00"));
    assert!(output.ends_with("Exiting program. Goodbye!\n"));

    Ok(())
}

#[test]
fn test_shell_keeps_multi_word_categories() -> Result<()> {
    let mut ledger = Ledger::new();
    run_session(&mut ledger, "2\n  Eating out  \n42.50\n6\n")?;

    assert_eq!(ledger.transactions()[0].category(), "Eating out");

    Ok(())
}

#[test]
fn test_shell_recovers_from_invalid_choice_and_amount() -> Result<()> {
    let mut ledger = Ledger::new();
    let output = run_session(&mut ledger, "9\nabc\n1\nSalary\nlots\n1\nSalary\n10\n6\n")?;

    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
    assert!(output.contains("Invalid amount. Please enter a number."));
    assert_eq!(ledger.len(), 1);

    Ok(())
}

#[test]
fn test_shell_stops_at_end_of_input() -> Result<()> {
    let mut ledger = Ledger::new();
    let output = run_session(&mut ledger, "1\nSalary\n")?;

    assert!(ledger.is_empty());
    assert!(output.ends_with("Enter amount: "));

    Ok(())
}

#[test]
fn test_shell_saves_and_loads_files() -> Result<()> {
    let directory = tempdir()?;
    let path = directory.path().join("budget.csv");
    let path_text = path.display().to_string();

    let mut ledger = Ledger::new();
    let script = format!("1\nSalary\n1500\n4\n{path_text}\n6\n");
    let output = run_session(&mut ledger, &script)?;

    assert!(output.contains(&format!("Transactions saved to {path_text}")));
    assert_eq!(fs::read_to_string(&path)?, "Income,Salary,1500\n");

    let mut restored = Ledger::new();
    let script = format!("5\n{path_text}\n3\n6\n");
    let output = run_session(&mut restored, &script)?;

    assert!(output.contains(&format!("Transactions loaded from {path_text}")));
    assert!(output.contains("Total Income: $1500.00"));
    assert_eq!(restored.transactions(), ledger.transactions());

    Ok(())
}

#[test]
fn test_shell_rejects_empty_filename() -> Result<()> {
    let mut ledger = Ledger::new();
    let output = run_session(&mut ledger, "4\n\n6\n")?;

    assert!(output.contains("Filename cannot be empty."));

    Ok(())
}

#[test]
fn test_shell_saves_with_configured_delimiter() -> Result<()> {
    let directory = tempdir()?;
    let path = directory.path().join("budget.txt");
    let script = format!("2\nRent; Utilities\n650.10\n4\n{}\n6\n", path.display());

    let mut ledger = Ledger::new();
    let mut shell = InteractiveShell::new(Cursor::new(script), Vec::new()).with_delimiter(b';');
    shell.run(&mut ledger)?;

    assert_eq!(fs::read_to_string(&path)?, "Expense;\"Rent; Utilities\";650.1\n");

    Ok(())
}
