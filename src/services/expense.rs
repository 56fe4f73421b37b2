//! Expense store
//!
//! Holds the last fetched expense list and keeps it in step with add and
//! delete calls. Also provides the display views (newest first, search).

use tracing::{debug, info};

use crate::api::FinanceApi;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId};

/// Expenses in reverse fetch order (the API returns oldest first)
pub fn newest_first(expenses: &[Expense]) -> Vec<&Expense> {
    expenses.iter().rev().collect()
}

/// Newest-first expenses whose name or description contains `query`,
/// ignoring case. An empty query keeps everything.
pub fn search<'e>(expenses: &'e [Expense], query: &str) -> Vec<&'e Expense> {
    expenses
        .iter()
        .rev()
        .filter(|e| e.matches_query(query))
        .collect()
}

/// In-memory expense list backed by the API
pub struct ExpenseStore<'a> {
    api: &'a dyn FinanceApi,
    expenses: Vec<Expense>,
}

impl<'a> ExpenseStore<'a> {
    /// Create an empty store; call [`fetch_all`](Self::fetch_all) to populate it
    pub fn new(api: &'a dyn FinanceApi) -> Self {
        Self {
            api,
            expenses: Vec::new(),
        }
    }

    /// Current list, in fetch order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Replace the list with the server's
    pub async fn fetch_all(&mut self) -> SpendwiseResult<&[Expense]> {
        let expenses = self.api.list_expenses().await?;
        debug!(count = expenses.len(), "fetched expenses");
        self.expenses = expenses;
        Ok(&self.expenses)
    }

    /// Validate `draft`, create it on the server and append the result
    pub async fn add(&mut self, draft: ExpenseDraft) -> SpendwiseResult<Expense> {
        let new = draft
            .validate()
            .map_err(|e| SpendwiseError::Validation(e.to_string()))?;

        let created = self.api.create_expense(&new).await?;
        info!(id = %created.id, name = %created.name, amount = %created.amount, "expense added");
        self.expenses.push(created.clone());
        Ok(created)
    }

    /// Delete `id` on the server, then drop it from the list.
    ///
    /// Returns the removed record when it was in the list.
    pub async fn delete(&mut self, id: &ExpenseId) -> SpendwiseResult<Option<Expense>> {
        self.api.delete_expense(id).await?;
        info!(%id, "expense deleted");

        let removed = self
            .expenses
            .iter()
            .position(|e| &e.id == id)
            .map(|idx| self.expenses.remove(idx));
        Ok(removed)
    }

    /// Look an expense up in the current list
    pub fn find(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    pub fn newest_first(&self) -> Vec<&Expense> {
        newest_first(&self.expenses)
    }

    pub fn search(&self, query: &str) -> Vec<&Expense> {
        search(&self.expenses, query)
    }
}
