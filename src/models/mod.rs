//! Core data models for Spendwise
//!
//! This module contains the records exchanged with the mock finance API
//! (users, expenses, budgets) and the client-side types built on them.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod user;

pub use budget::{Budget, BudgetDraft, BudgetStatus, BudgetValidationError, NewBudget};
pub use category::{category_color, palette_color, HexColor};
pub use expense::{Expense, ExpenseDraft, ExpenseValidationError, NewExpense};
pub use ids::{BudgetId, ExpenseId, UserId};
pub use money::Money;
pub use user::{Credentials, CredentialsError, Session, SessionUser, User};
