//! CSV export of expenses

use serde::Serialize;
use std::io::Write;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::Expense;
use crate::services::expense::newest_first;

const HEADER: [&str; 6] = ["ID", "Date", "Title", "Category", "Amount", "Description"];

#[derive(Serialize)]
struct ExpenseRow<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Title")]
    name: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Description")]
    description: &'a str,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.as_str(),
            date: expense.date().format("%Y-%m-%d").to_string(),
            name: &expense.name,
            category: expense.category_label(),
            amount: expense.amount.to_decimal_string(),
            description: expense.description.as_deref().unwrap_or(""),
        }
    }
}

/// Write `expenses` as CSV, newest first.
///
/// The header row is written even when there are no expenses.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> SpendwiseResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| SpendwiseError::Export(e.to_string()))?;

    for expense in newest_first(expenses) {
        csv_writer
            .serialize(ExpenseRow::from(expense))
            .map_err(|e| SpendwiseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SpendwiseError::Export(e.to_string()))?;
    Ok(())
}
