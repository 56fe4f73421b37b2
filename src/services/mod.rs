//! Service layer for Spendwise
//!
//! The service layer sits between the CLI and the API client, handling form
//! validation, the in-memory record lists and the session.

pub mod auth;
pub mod budget;
pub mod expense;

pub use auth::AuthService;
pub use budget::BudgetStore;
pub use expense::ExpenseStore;
