//! Custom error types for Spendwise
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant also maps onto one of the
//! short user-facing messages shown by the CLI (see [`SpendwiseError::user_message`]).

use thiserror::Error;

/// Shown when the login lookup returns no user record
pub const MSG_ACCOUNT_NOT_FOUND: &str =
    "No account found with this username. Please check your username or sign up.";

/// Shown when a user record exists but the password does not match
pub const MSG_INVALID_CREDENTIALS: &str =
    "The password you entered is incorrect. Please try again.";

/// Shown for any transport failure during login
pub const MSG_LOGIN_FAILED: &str =
    "Unable to connect to the server. Please check your internet connection and try again.";

/// Generic failures for the non-login actions
pub const MSG_LOAD_EXPENSES_FAILED: &str = "Failed to load expenses";
pub const MSG_ADD_EXPENSE_FAILED: &str = "Failed to add expense. Please try again.";
pub const MSG_DELETE_EXPENSE_FAILED: &str = "Failed to delete expense";
pub const MSG_LOAD_BUDGETS_FAILED: &str = "Failed to load budgets";
pub const MSG_CREATE_BUDGET_FAILED: &str = "Failed to create budget";

/// The main error type for Spendwise operations
#[derive(Error, Debug)]
pub enum SpendwiseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("{0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// No user record matches the username given at login
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// The stored password does not match
    #[error("Invalid credentials for '{0}'")]
    InvalidCredentials(String),

    /// The request never produced a response (DNS, connect, timeout, decode)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A command needs a session and there is none
    #[error("Not logged in. Run 'spendwise login' first.")]
    NotLoggedIn,

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// An action failed and was reduced to the text shown to the user
    #[error("{0}")]
    Failed(String),
}

impl SpendwiseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::AccountNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the failure happened talking to the backend
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Api { .. })
    }

    /// Collapse a login error onto the three login messages.
    ///
    /// Validation errors keep their own text.
    pub fn login_message(&self) -> String {
        match self {
            Self::AccountNotFound(_) => MSG_ACCOUNT_NOT_FOUND.to_string(),
            Self::InvalidCredentials(_) => MSG_INVALID_CREDENTIALS.to_string(),
            Self::Validation(msg) => msg.clone(),
            _ => MSG_LOGIN_FAILED.to_string(),
        }
    }

    /// Replace a login error with its user-facing form
    pub fn into_login_failure(self) -> Self {
        Self::Failed(self.login_message())
    }

    /// Replace a request failure with `fallback`; other errors keep their text
    pub fn into_failure(self, fallback: &str) -> Self {
        if self.is_request_failure() {
            tracing::warn!(error = %self, "{}", fallback);
        }
        Self::Failed(self.user_message(fallback))
    }

    /// Collapse a non-login error for display.
    ///
    /// Request failures become `fallback`; everything else keeps its own
    /// display text.
    pub fn user_message(&self, fallback: &str) -> String {
        if self.is_request_failure() {
            fallback.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<std::io::Error> for SpendwiseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendwiseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for SpendwiseError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Api {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => Self::Network(err.to_string()),
        }
    }
}

/// Result type alias for Spendwise operations
pub type SpendwiseResult<T> = Result<T, SpendwiseError>;
