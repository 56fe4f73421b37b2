//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod auth;
pub mod budget;
pub mod dashboard;
pub mod expense;

use std::io::Write;

use crate::api::FinanceApi;
use crate::config::Settings;
use crate::error::SpendwiseResult;
use crate::models::Session;
use crate::services::AuthService;
use crate::storage::SessionStore;

pub use auth::{handle_login, handle_logout, handle_whoami, LoginArgs};
pub use budget::{handle_budget_command, BudgetCommands};
pub use dashboard::handle_dashboard;
pub use expense::{handle_expense_command, ExpenseCommands};

/// Shared state for one CLI invocation
pub struct CliContext<'a> {
    pub api: &'a dyn FinanceApi,
    pub sessions: &'a SessionStore,
    pub settings: &'a Settings,
    /// Whether to emit ANSI colors
    pub color: bool,
}

impl<'a> CliContext<'a> {
    pub fn auth(&self) -> AuthService<'a> {
        AuthService::new(self.api, self.sessions)
    }

    /// The stored session, or `NotLoggedIn`
    pub fn require_session(&self) -> SpendwiseResult<Session> {
        self.auth().require_session()
    }
}

/// Print `prompt` and read one trimmed line from stdin
pub(crate) fn prompt_line(prompt: &str) -> SpendwiseResult<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask a yes/no question; anything but "y"/"yes" is a no
pub(crate) fn confirm(question: &str) -> SpendwiseResult<bool> {
    let answer = prompt_line(&format!("{} (yes/no): ", question))?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
