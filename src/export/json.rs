//! JSON export of expenses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Expense, Money};
use crate::services::expense::newest_first;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported expense document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub expense_count: usize,
    pub total: Money,
    /// Newest first
    pub expenses: Vec<Expense>,
}

impl ExpenseExport {
    pub fn new(expenses: &[Expense]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            total: expenses.iter().map(|e| e.amount).sum(),
            expenses: newest_first(expenses).into_iter().cloned().collect(),
        }
    }
}

/// Write `expenses` as pretty-printed JSON
pub fn export_expenses_json<W: Write>(expenses: &[Expense], mut writer: W) -> SpendwiseResult<()> {
    let export = ExpenseExport::new(expenses);
    serde_json::to_writer_pretty(&mut writer, &export)
        .map_err(|e| SpendwiseError::Export(e.to_string()))?;
    writeln!(writer)
        .and_then(|_| writer.flush())
        .map_err(|e| SpendwiseError::Export(e.to_string()))
}
