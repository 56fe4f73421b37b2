//! Budget store
//!
//! Fetches budgets and creates new ones. Progress figures come from the
//! `Budget` model itself.

use tracing::{debug, info};

use crate::api::FinanceApi;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Budget, BudgetDraft};

/// The budget closest to (or furthest past) its limit.
///
/// Ties go to the earliest budget in the list.
pub fn most_critical(budgets: &[Budget]) -> Option<&Budget> {
    budgets.iter().rev().max_by(|a, b| {
        a.raw_percentage()
            .partial_cmp(&b.raw_percentage())
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// In-memory budget list backed by the API
pub struct BudgetStore<'a> {
    api: &'a dyn FinanceApi,
    budgets: Vec<Budget>,
}

impl<'a> BudgetStore<'a> {
    pub fn new(api: &'a dyn FinanceApi) -> Self {
        Self {
            api,
            budgets: Vec::new(),
        }
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Replace the list with the server's
    pub async fn fetch_all(&mut self) -> SpendwiseResult<&[Budget]> {
        let budgets = self.api.list_budgets().await?;
        debug!(count = budgets.len(), "fetched budgets");
        self.budgets = budgets;
        Ok(&self.budgets)
    }

    /// Validate `draft`, create it on the server and append the result
    pub async fn create(&mut self, draft: BudgetDraft) -> SpendwiseResult<Budget> {
        let new = draft
            .validate()
            .map_err(|e| SpendwiseError::Validation(e.to_string()))?;

        let created = self.api.create_budget(&new).await?;
        info!(id = %created.id, category = %created.category, limit = %created.limit, "budget created");
        self.budgets.push(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MemoryApi;
    use crate::models::{BudgetId, Money, NewBudget};

    fn budget(limit: i64, current: i64) -> Budget {
        Budget {
            id: BudgetId::new(format!("{}-{}", limit, current)),
            category: "Food".into(),
            limit: Money::from_cents(limit),
            current_amount: Money::from_cents(current),
            period: "Monthly".into(),
        }
    }

    #[test]
    fn test_most_critical_uses_raw_ratio() {
        let budgets = vec![budget(100, 50), budget(100, 300), budget(100, 150)];
        assert_eq!(most_critical(&budgets).unwrap().current_amount.cents(), 300);
        assert!(most_critical(&[]).is_none());
    }

    #[test]
    fn test_most_critical_tie_keeps_first() {
        let budgets = vec![budget(100, 20), budget(100, 90), budget(200, 180), budget(50, 45)];
        assert_eq!(most_critical(&budgets).unwrap().id.as_str(), "100-90");
    }

    #[tokio::test]
    async fn test_fetch_and_create() {
        let api = MemoryApi::new();
        api.seed_budget(NewBudget {
            category: "Food".into(),
            limit: Money::from_cents(30000),
            current_amount: Money::from_cents(25000),
            period: "Monthly".into(),
        });
        let mut store = BudgetStore::new(&api);
        assert_eq!(store.fetch_all().await.unwrap().len(), 1);

        let err = store
            .create(BudgetDraft {
                category: "Travel".into(),
                limit: "500".into(),
                period: " ".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");

        let created = store
            .create(BudgetDraft {
                category: "Travel".into(),
                limit: "500".into(),
                period: "Monthly".into(),
            })
            .await
            .unwrap();
        assert!(created.current_amount.is_zero());
        assert_eq!(store.budgets().len(), 2);
        assert_eq!(store.fetch_all().await.unwrap().len(), 2);
    }
}
