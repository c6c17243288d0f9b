use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::{Transaction, TransactionKind};
use crate::types::Monetary;

const RULE: &str = "----------------------------------------";

/// Totals derived from a ledger, along with the rows they were computed from.
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    rows: &'a [Transaction],
    total_income: Monetary,
    total_expense: Monetary,
    net_savings: Monetary
}

impl<'a> Summary<'a> {
    pub(crate) fn from_rows(rows: &'a [Transaction]) -> Self {
        let mut total_income = Monetary::new();
        let mut total_expense = Monetary::new();

        for transaction in rows {
            match transaction.kind() {
                TransactionKind::Income => total_income += transaction.amount(),
                TransactionKind::Expense => total_expense += transaction.amount()
            }
        }

        let mut net_savings = total_income;
        net_savings -= total_expense;

        Self {
            rows,
            total_income,
            total_expense,
            net_savings
        }
    }

    /// Every transaction in insertion order.
    pub fn rows(&self) -> &'a [Transaction] {
        self.rows
    }

    pub fn total_income(&self) -> Monetary {
        self.total_income
    }

    pub fn total_expense(&self) -> Monetary {
        self.total_expense
    }

    /// Always `total_income - total_expense`.
    pub fn net_savings(&self) -> Monetary {
        self.net_savings
    }
}

impl Display for Summary<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "Transaction Summary:")?;
        writeln!(formatter, "{:<10}{:<15}Amount", "Type", "Category")?;
        writeln!(formatter, "{RULE}")?;

        for row in self.rows() {
            writeln!(formatter, "{:<10}{:<15}${}", row.kind(), row.category(), row.amount())?;
        }

        writeln!(formatter, "{RULE}")?;
        writeln!(formatter, "Total Income: ${}", self.total_income())?;
        writeln!(formatter, "Total Expenses: ${}", self.total_expense())?;
        write!(formatter, "Net Savings: ${}", self.net_savings())
    }
}
