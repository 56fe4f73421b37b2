//! YAML export of expenses

use std::io::Write;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::export::json::ExpenseExport;
use crate::models::Expense;

/// Write `expenses` as YAML, preceded by a comment header
pub fn export_expenses_yaml<W: Write>(expenses: &[Expense], mut writer: W) -> SpendwiseResult<()> {
    let export = ExpenseExport::new(expenses);

    writeln!(writer, "# Spendwise expense export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer))
        .map_err(|e| SpendwiseError::Export(e.to_string()))?;

    serde_yaml::to_writer(&mut writer, &export)
        .map_err(|e| SpendwiseError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| SpendwiseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_export_yaml() {
        let expenses = vec![Expense {
            id: ExpenseId::new("7"),
            name: "Concert".into(),
            amount: Money::from_cents(4500),
            description: Some("Front row".into()),
            created_at: Utc.with_ymd_and_hms(2025, 2, 14, 20, 0, 0).unwrap(),
            category: Some("Entertainment".into()),
        }];

        let mut buf = Vec::new();
        export_expenses_yaml(&expenses, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.starts_with("# Spendwise expense export"));
        assert!(output.contains("expense_count: 1"));
        assert!(output.contains("name: Concert"));

        let parsed: ExpenseExport = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed.expenses[0].category.as_deref(), Some("Entertainment"));
    }
}
