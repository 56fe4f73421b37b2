//! Budget CLI commands

use clap::Subcommand;

use super::CliContext;
use crate::display::{format_budget_list, format_budget_row};
use crate::error::{SpendwiseResult, MSG_CREATE_BUDGET_FAILED, MSG_LOAD_BUDGETS_FAILED};
use crate::models::BudgetDraft;
use crate::services::BudgetStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List budgets with their progress
    List,
    /// Create a budget for a category
    Create {
        /// Category the budget covers
        category: String,
        /// Spending limit (e.g., "300" or "300.00")
        limit: String,
        /// Budget period
        #[arg(short, long, default_value = "Monthly")]
        period: String,
    },
}

/// Handle a budget command
pub async fn handle_budget_command(
    ctx: &CliContext<'_>,
    cmd: BudgetCommands,
) -> SpendwiseResult<()> {
    ctx.require_session()?;
    let mut store = BudgetStore::new(ctx.api);

    match cmd {
        BudgetCommands::List => {
            let budgets = store
                .fetch_all()
                .await
                .map_err(|e| e.into_failure(MSG_LOAD_BUDGETS_FAILED))?;
            print!("{}", format_budget_list(budgets, ctx.settings, ctx.color));
        }

        BudgetCommands::Create {
            category,
            limit,
            period,
        } => {
            let created = store
                .create(BudgetDraft {
                    category,
                    limit,
                    period,
                })
                .await
                .map_err(|e| e.into_failure(MSG_CREATE_BUDGET_FAILED))?;

            println!("Created budget:");
            print!("{}", format_budget_row(&created, ctx.settings, ctx.color));
        }
    }

    Ok(())
}
