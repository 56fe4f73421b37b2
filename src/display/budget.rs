//! Budget display formatting

use super::style::paint_status;
use crate::config::Settings;
use crate::models::Budget;

const BAR_WIDTH: usize = 20;

/// A fixed-width bar for a clamped percentage, e.g. `[#####-----]`
pub fn format_progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// One budget as a two-line block
pub fn format_budget_row(budget: &Budget, settings: &Settings, color: bool) -> String {
    let symbol = &settings.currency_symbol;
    let percentage = budget.percentage_used();
    let status = budget.status();

    let remaining = match budget.remaining() {
        Some(left) => format!("{} remaining", left.format_with_symbol(symbol)),
        None => "Budget exceeded".to_string(),
    };

    format!(
        "{:<20} {:>10} / {:<10} {:<10}\n  {} {:>3.0}%  {}  {}\n",
        budget.category,
        budget.current_amount.format_with_symbol(symbol),
        budget.limit.format_with_symbol(symbol),
        budget.period,
        format_progress_bar(percentage, BAR_WIDTH),
        percentage,
        paint_status(&format!("{:<7}", status), status, color),
        remaining
    )
}

/// All budgets, one block each
pub fn format_budget_list(budgets: &[Budget], settings: &Settings, color: bool) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<20} {:>10} / {:<10} {:<10}\n",
        "Category", "Spent", "Limit", "Period"
    ));
    output.push_str(&"-".repeat(56));
    output.push('\n');

    for budget in budgets {
        output.push_str(&format_budget_row(budget, settings, color));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, Money};

    fn budget(category: &str, limit: i64, current: i64) -> Budget {
        Budget {
            id: BudgetId::new("1"),
            category: category.into(),
            limit: Money::from_cents(limit),
            current_amount: Money::from_cents(current),
            period: "Monthly".into(),
        }
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(format_progress_bar(0.0, 10), "[----------]");
        assert_eq!(format_progress_bar(50.0, 10), "[#####-----]");
        assert_eq!(format_progress_bar(250.0, 10), "[##########]");
        assert_eq!(format_progress_bar(-5.0, 4), "[----]");
    }

    #[test]
    fn test_row_safe_budget() {
        let output = format_budget_row(&budget("Food", 30000, 15000), &Settings::default(), false);
        assert!(output.contains("Food"));
        assert!(output.contains("$150.00"));
        assert!(output.contains("$300.00"));
        assert!(output.contains(" 50%"));
        assert!(output.contains("Safe"));
        assert!(output.contains("$150.00 remaining"));
    }

    #[test]
    fn test_row_exceeded_budget() {
        let output = format_budget_row(&budget("Travel", 10000, 12000), &Settings::default(), false);
        assert!(output.contains("100%"));
        assert!(output.contains("Danger"));
        assert!(output.contains("Budget exceeded"));
    }

    #[test]
    fn test_row_warning_budget() {
        let output = format_budget_row(&budget("Fun", 10000, 8000), &Settings::default(), false);
        assert!(output.contains("Warning"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_budget_list(&[], &Settings::default(), false),
            "No budgets found.\n"
        );
    }
}
