//! Expense display formatting

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::style::paint;
use crate::config::Settings;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[&Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: format_date(&e.created_at, &settings.date_format),
        title: truncate(&e.name, 32),
        category: e.category_label().to_string(),
        amount: e.amount.format_with_symbol(&settings.currency_symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let total = expenses
        .iter()
        .map(|e| e.amount)
        .sum::<crate::models::Money>();

    format!(
        "{}\n{} expense(s), {} total\n",
        table,
        expenses.len(),
        total.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a single expense, with its category in color
pub fn format_expense_details(expense: &Expense, settings: &Settings, color: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Title:       {}\n", expense.name));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(&expense.created_at, &settings.date_format)
    ));
    output.push_str(&format!(
        "Category:    {}\n",
        paint(expense.category_label(), expense.color(), color)
    ));

    if let Some(description) = expense.description.as_deref().filter(|d| !d.is_empty()) {
        output.push_str(&format!("Description: {}\n", description));
    }

    output
}

/// Format `date` with a user-supplied strftime pattern, falling back to
/// ISO dates when the pattern is invalid
pub fn format_date(date: &DateTime<Utc>, pattern: &str) -> String {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return date.format("%Y-%m-%d").to_string();
    }
    date.format(pattern).to_string()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
