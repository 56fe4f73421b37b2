//! In-process implementation of the finance API
//!
//! Behaves like the mock backend: assigns sequential string ids, filters
//! users by username substring (as mockapi does), answers unknown ids with a
//! 404, and can be switched offline to simulate transport failures.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use super::FinanceApi;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Budget, BudgetId, Expense, ExpenseId, NewBudget, NewExpense, User, UserId};

/// In-memory finance backend
#[derive(Default)]
pub struct MemoryApi {
    users: RwLock<Vec<User>>,
    expenses: RwLock<Vec<Expense>>,
    budgets: RwLock<Vec<Budget>>,
    next_id: AtomicU64,
    offline: AtomicBool,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> String {
        (self.next_id.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }

    fn check_online(&self) -> SpendwiseResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(SpendwiseError::Network("connection refused".into()))
        } else {
            Ok(())
        }
    }

    /// Make every subsequent call fail with a network error (or recover)
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Add a user record and return its id
    pub fn add_user(&self, username: &str, password: &str, name: &str) -> UserId {
        let id = UserId::new(self.next_id());
        if let Ok(mut users) = self.users.write() {
            users.push(User {
                id: id.clone(),
                username: username.into(),
                password: password.into(),
                name: name.into(),
            });
        }
        id
    }

    /// Store an expense as if it had been created earlier
    pub fn seed_expense(&self, expense: NewExpense) -> Expense {
        let record = Expense {
            id: ExpenseId::new(self.next_id()),
            name: expense.name,
            amount: expense.amount,
            description: expense.description,
            created_at: expense.created_at,
            category: expense.category,
        };
        if let Ok(mut expenses) = self.expenses.write() {
            expenses.push(record.clone());
        }
        record
    }

    /// Store a budget as if it had been created earlier
    pub fn seed_budget(&self, budget: NewBudget) -> Budget {
        let record = Budget {
            id: BudgetId::new(self.next_id()),
            category: budget.category,
            limit: budget.limit,
            current_amount: budget.current_amount,
            period: budget.period,
        };
        if let Ok(mut budgets) = self.budgets.write() {
            budgets.push(record.clone());
        }
        record
    }

    /// Snapshot of the stored expenses
    pub fn expenses(&self) -> Vec<Expense> {
        self.expenses.read().map(|e| e.clone()).unwrap_or_default()
    }
}

fn lock_error<E: std::fmt::Display>(e: E) -> SpendwiseError {
    SpendwiseError::Storage(format!("Failed to acquire lock: {}", e))
}

#[async_trait]
impl FinanceApi for MemoryApi {
    async fn find_users(&self, username: &str) -> SpendwiseResult<Vec<User>> {
        self.check_online()?;
        let users = self.users.read().map_err(lock_error)?;
        let needle = username.to_lowercase();
        Ok(users
            .iter()
            .filter(|u| u.username.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn list_expenses(&self) -> SpendwiseResult<Vec<Expense>> {
        self.check_online()?;
        Ok(self.expenses.read().map_err(lock_error)?.clone())
    }

    async fn create_expense(&self, expense: &NewExpense) -> SpendwiseResult<Expense> {
        self.check_online()?;
        Ok(self.seed_expense(expense.clone()))
    }

    async fn delete_expense(&self, id: &ExpenseId) -> SpendwiseResult<()> {
        self.check_online()?;
        let mut expenses = self.expenses.write().map_err(lock_error)?;
        let before = expenses.len();
        expenses.retain(|e| &e.id != id);
        if expenses.len() == before {
            return Err(SpendwiseError::Api {
                status: 404,
                message: "Not found".into(),
            });
        }
        Ok(())
    }

    async fn list_budgets(&self) -> SpendwiseResult<Vec<Budget>> {
        self.check_online()?;
        Ok(self.budgets.read().map_err(lock_error)?.clone())
    }

    async fn create_budget(&self, budget: &NewBudget) -> SpendwiseResult<Budget> {
        self.check_online()?;
        Ok(self.seed_budget(budget.clone()))
    }
}
