//! Backend access for Spendwise
//!
//! Everything the client needs from the mock finance API sits behind the
//! [`FinanceApi`] trait:
//!
//! - `HttpApi`: the real client, JSON over HTTP via reqwest
//! - `MemoryApi`: an in-process store with the same behaviour, used by tests
//!
//! Calls are independent: no retries, no auth headers, no ordering between
//! concurrent requests.

pub mod http;
pub mod memory;

use async_trait::async_trait;

use crate::error::SpendwiseResult;
use crate::models::{Budget, Expense, ExpenseId, NewBudget, NewExpense, User};

pub use http::HttpApi;
pub use memory::MemoryApi;

/// Operations offered by the mock finance API
#[async_trait]
pub trait FinanceApi: Send + Sync {
    /// `GET /users?username=...`
    ///
    /// An empty filter result is an empty list, not an error.
    async fn find_users(&self, username: &str) -> SpendwiseResult<Vec<User>>;

    /// `GET /expenses`
    async fn list_expenses(&self) -> SpendwiseResult<Vec<Expense>>;

    /// `POST /expenses`, returning the stored record
    async fn create_expense(&self, expense: &NewExpense) -> SpendwiseResult<Expense>;

    /// `DELETE /expenses/:id`
    async fn delete_expense(&self, id: &ExpenseId) -> SpendwiseResult<()>;

    /// `GET /budgets`
    async fn list_budgets(&self) -> SpendwiseResult<Vec<Budget>>;

    /// `POST /budgets`, returning the stored record
    async fn create_budget(&self, budget: &NewBudget) -> SpendwiseResult<Budget>;
}
