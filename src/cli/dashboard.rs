//! Dashboard command

use chrono::Local;

use super::CliContext;
use crate::error::{SpendwiseResult, MSG_LOAD_BUDGETS_FAILED, MSG_LOAD_EXPENSES_FAILED};
use crate::reports::DashboardReport;
use crate::services::{BudgetStore, ExpenseStore};

/// Fetch expenses and budgets together and print the dashboard
pub async fn handle_dashboard(ctx: &CliContext<'_>) -> SpendwiseResult<()> {
    let session = ctx.require_session()?;

    let mut expenses = ExpenseStore::new(ctx.api);
    let mut budgets = BudgetStore::new(ctx.api);
    let (expense_result, budget_result) = tokio::join!(expenses.fetch_all(), budgets.fetch_all());
    expense_result.map_err(|e| e.into_failure(MSG_LOAD_EXPENSES_FAILED))?;
    budget_result.map_err(|e| e.into_failure(MSG_LOAD_BUDGETS_FAILED))?;

    let report = DashboardReport::generate(
        expenses.expenses(),
        budgets.budgets(),
        &Local::now(),
        ctx.settings.recent_expense_count,
    );

    println!("Welcome back, {}", session.user.display_name());
    println!();
    print!("{}", report.format_terminal(&ctx.settings.currency_symbol));
    Ok(())
}
