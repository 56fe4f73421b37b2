//! Reports module for Spendwise
//!
//! Derived views over fetched records. Reports never talk to the API.

pub mod dashboard;

pub use dashboard::{
    category_breakdown, monthly_trend, BudgetAlert, CategorySlice, DashboardReport, MonthBucket,
};
