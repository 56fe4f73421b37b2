//! Budget model
//!
//! A spending limit for one category over a named period. `current_amount`
//! comes from the API as-is; it is not reconciled against expenses.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// Percentage at which a budget moves from safe to warning
pub const WARNING_THRESHOLD: f64 = 75.0;

/// Percentage at which a budget moves from warning to danger
pub const DANGER_THRESHOLD: f64 = 90.0;

/// A budget record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: BudgetId,
    pub category: String,
    pub limit: Money,
    #[serde(default)]
    pub current_amount: Money,
    #[serde(default)]
    pub period: String,
}

/// How close a budget is to its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Under 75% used
    Safe,
    /// 75% up to (not including) 90%
    Warning,
    /// 90% or more
    Danger,
}

impl BudgetStatus {
    /// Band for a display percentage
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= DANGER_THRESHOLD {
            Self::Danger
        } else if percentage >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Safe
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Safe => "Safe",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
        };
        f.pad(label)
    }
}

impl Budget {
    /// currentAmount / limit x 100, unclamped.
    ///
    /// A non-positive limit yields infinity when anything was spent and zero
    /// otherwise.
    pub fn raw_percentage(&self) -> f64 {
        if !self.limit.is_positive() {
            return if self.current_amount.is_positive() {
                f64::INFINITY
            } else {
                0.0
            };
        }
        self.current_amount.cents() as f64 / self.limit.cents() as f64 * 100.0
    }

    /// Percentage used, clamped to [0, 100] for display
    pub fn percentage_used(&self) -> f64 {
        self.raw_percentage().clamp(0.0, 100.0)
    }

    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::from_percentage(self.percentage_used())
    }

    /// Amount left, or `None` once the limit is reached
    pub fn remaining(&self) -> Option<Money> {
        if self.limit > self.current_amount {
            Some(self.limit - self.current_amount)
        } else {
            None
        }
    }
}

/// Body of `POST /budgets`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category: String,
    pub limit: Money,
    pub current_amount: Money,
    pub period: String,
}

/// Raw form input for a new budget
#[derive(Debug, Clone, Default)]
pub struct BudgetDraft {
    pub category: String,
    pub limit: String,
    pub period: String,
}

/// Validation error for the budget form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    MissingFields,
    InvalidLimit,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Please fill in all fields"),
            Self::InvalidLimit => write!(f, "Please enter a valid limit"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

impl BudgetDraft {
    /// Validate the form and build the request body with nothing spent yet
    pub fn validate(self) -> Result<NewBudget, BudgetValidationError> {
        let category = self.category.trim();
        let limit = self.limit.trim();
        let period = self.period.trim();

        if category.is_empty() || limit.is_empty() || period.is_empty() {
            return Err(BudgetValidationError::MissingFields);
        }

        let limit = Money::parse(limit).map_err(|_| BudgetValidationError::InvalidLimit)?;
        if !limit.is_positive() {
            return Err(BudgetValidationError::InvalidLimit);
        }

        Ok(NewBudget {
            category: category.to_string(),
            limit,
            current_amount: Money::zero(),
            period: period.to_string(),
        })
    }
}
