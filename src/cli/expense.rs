//! Expense CLI commands
//!
//! Implements listing, searching, adding, deleting and exporting expenses.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use super::{confirm, CliContext};
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{
    SpendwiseError, SpendwiseResult, MSG_ADD_EXPENSE_FAILED, MSG_DELETE_EXPENSE_FAILED,
    MSG_LOAD_EXPENSES_FAILED,
};
use crate::export::{
    export_expenses_csv, export_expenses_json, export_expenses_yaml, ExportFormat,
};
use crate::models::expense::parse_timestamp;
use crate::models::{ExpenseDraft, ExpenseId};
use crate::services::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List expenses, newest first
    List {
        /// Only show expenses whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Show at most this many expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Add a new expense
    Add {
        /// Short title, e.g. "Groceries"
        title: String,
        /// Amount (e.g., "12.50" or "12")
        amount: String,
        /// Date (YYYY-MM-DD); defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// Category, e.g. Food or Transportation
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one expense
    Show {
        /// Expense ID
        id: ExpenseId,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: ExpenseId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Export expenses to a file or stdout
    Export {
        /// Output format (csv, json, yaml)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an expense command
pub async fn handle_expense_command(
    ctx: &CliContext<'_>,
    cmd: ExpenseCommands,
) -> SpendwiseResult<()> {
    ctx.require_session()?;
    let mut store = ExpenseStore::new(ctx.api);

    match cmd {
        ExpenseCommands::List { search, limit } => {
            store
                .fetch_all()
                .await
                .map_err(|e| e.into_failure(MSG_LOAD_EXPENSES_FAILED))?;

            let mut shown = match search.as_deref() {
                Some(query) => store.search(query),
                None => store.newest_first(),
            };
            if let Some(limit) = limit {
                shown.truncate(limit);
            }
            print!("{}", format_expense_table(&shown, ctx.settings));
        }

        ExpenseCommands::Add {
            title,
            amount,
            date,
            description,
            category,
        } => {
            let date = date
                .map(|d| {
                    parse_timestamp(&d).ok_or_else(|| {
                        SpendwiseError::Validation(format!(
                            "Invalid date: '{}'. Use format YYYY-MM-DD",
                            d
                        ))
                    })
                })
                .transpose()?;

            let draft = ExpenseDraft {
                title,
                amount,
                date,
                description,
                category,
            };
            let created = store
                .add(draft)
                .await
                .map_err(|e| e.into_failure(MSG_ADD_EXPENSE_FAILED))?;

            println!("Added expense:");
            print!(
                "{}",
                format_expense_details(&created, ctx.settings, ctx.color)
            );
        }

        ExpenseCommands::Show { id } => {
            store
                .fetch_all()
                .await
                .map_err(|e| e.into_failure(MSG_LOAD_EXPENSES_FAILED))?;
            let expense = store
                .find(&id)
                .ok_or_else(|| SpendwiseError::expense_not_found(id.as_str()))?;
            print!(
                "{}",
                format_expense_details(expense, ctx.settings, ctx.color)
            );
        }

        ExpenseCommands::Delete { id, yes } => {
            store
                .fetch_all()
                .await
                .map_err(|e| e.into_failure(MSG_LOAD_EXPENSES_FAILED))?;
            let expense = store
                .find(&id)
                .ok_or_else(|| SpendwiseError::expense_not_found(id.as_str()))?;

            if !yes {
                print!(
                    "{}",
                    format_expense_details(expense, ctx.settings, ctx.color)
                );
                println!();
                if !confirm("Are you sure you want to delete this expense?")? {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            let removed = store
                .delete(&id)
                .await
                .map_err(|e| e.into_failure(MSG_DELETE_EXPENSE_FAILED))?;
            match removed {
                Some(expense) => println!("Deleted expense: {} ({})", expense.name, expense.id),
                None => println!("Deleted expense {}", id),
            }
        }

        ExpenseCommands::Export { format, output } => {
            store
                .fetch_all()
                .await
                .map_err(|e| e.into_failure(MSG_LOAD_EXPENSES_FAILED))?;
            let expenses = store.expenses();

            match &output {
                Some(path) => {
                    let file = File::create(path).map_err(|e| {
                        SpendwiseError::Export(format!(
                            "Failed to create {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    write_export(format, expenses, BufWriter::new(file))?;
                    println!(
                        "Exported {} expense(s) as {} to {}",
                        expenses.len(),
                        format,
                        path.display()
                    );
                }
                None => write_export(format, expenses, std::io::stdout().lock())?,
            }
        }
    }

    Ok(())
}

fn write_export<W: std::io::Write>(
    format: ExportFormat,
    expenses: &[crate::models::Expense],
    writer: W,
) -> SpendwiseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, writer),
        ExportFormat::Json => export_expenses_json(expenses, writer),
        ExportFormat::Yaml => export_expenses_yaml(expenses, writer),
    }
}
