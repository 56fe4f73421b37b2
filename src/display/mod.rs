//! Display formatting for terminal output
//!
//! Formats expenses, budgets and colored category labels for the CLI.
//! Everything here returns a `String`; printing is the caller's job.

pub mod budget;
pub mod expense;
pub mod style;

pub use budget::{format_budget_list, format_budget_row, format_progress_bar};
pub use expense::{format_date, format_expense_details, format_expense_table};
pub use style::{colors_enabled, paint, paint_status};
