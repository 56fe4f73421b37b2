//! Dashboard report
//!
//! Pure derivation from already-fetched expenses and budgets: spend totals,
//! a per-category breakdown, a six-month trend and the budget closest to its
//! limit.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::models::{palette_color, Budget, Expense, HexColor, Money};
use crate::services::budget::most_critical;
use crate::services::expense::newest_first;

/// Number of trailing calendar months in the trend
pub const TREND_MONTHS: usize = 6;

/// Budgets used beyond this percentage raise an alert
pub const ALERT_THRESHOLD: f64 = 80.0;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Spend for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub total: Money,
    /// Share of total spend, 0-100
    pub percentage: f64,
    pub color: HexColor,
}

/// Spend for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBucket {
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub total: Money,
}

impl MonthBucket {
    /// Short month name, e.g. "May"
    pub fn label(&self) -> &'static str {
        MONTH_LABELS[(self.month as usize - 1) % 12]
    }

    /// Sortable key, e.g. "2025-05"
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// The budget with the highest usage
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub budget: Budget,
    /// Unclamped percentage used
    pub percentage: f64,
}

impl BudgetAlert {
    /// Whether the usage is high enough to warn about
    pub fn is_alerting(&self) -> bool {
        self.percentage > ALERT_THRESHOLD
    }
}

/// Everything the dashboard shows
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub total_spent: Money,
    pub expense_count: usize,
    pub highest_expense: Money,
    pub average_expense: Money,
    /// In order of first appearance
    pub categories: Vec<CategorySlice>,
    /// Exactly [`TREND_MONTHS`] buckets, oldest first, ending at the current month
    pub monthly: Vec<MonthBucket>,
    pub critical_budget: Option<BudgetAlert>,
    /// Most recent expenses first
    pub recent: Vec<Expense>,
}

impl DashboardReport {
    /// Build the dashboard as of `now`.
    ///
    /// Month buckets use `now`'s timezone for both the window and each
    /// expense's date.
    pub fn generate<Tz: TimeZone>(
        expenses: &[Expense],
        budgets: &[Budget],
        now: &DateTime<Tz>,
        recent_count: usize,
    ) -> Self {
        let total_spent: Money = expenses.iter().map(|e| e.amount).sum();
        let expense_count = expenses.len();

        let highest_expense = expenses
            .iter()
            .map(|e| e.amount)
            .max()
            .unwrap_or_default();

        let average_expense = if expense_count == 0 {
            Money::zero()
        } else {
            Money::from_cents((total_spent.cents() as f64 / expense_count as f64).round() as i64)
        };

        let critical_budget = most_critical(budgets).map(|b| BudgetAlert {
            budget: b.clone(),
            percentage: b.raw_percentage(),
        });

        let recent = newest_first(expenses)
            .into_iter()
            .take(recent_count)
            .cloned()
            .collect();

        Self {
            total_spent,
            expense_count,
            highest_expense,
            average_expense,
            categories: category_breakdown(expenses),
            monthly: monthly_trend(expenses, now),
            critical_budget,
            recent,
        }
    }

    /// Category with the largest spend
    pub fn top_category(&self) -> Option<&CategorySlice> {
        self.categories
            .iter()
            .reduce(|best, c| if c.total > best.total { c } else { best })
    }

    /// Sum of the trend buckets
    pub fn trend_total(&self) -> Money {
        self.monthly.iter().map(|b| b.total).sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency);
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<16} {:>12}\n", "Total Spent:", money(self.total_spent)));
        output.push_str(&format!("{:<16} {:>12}\n", "Expenses:", self.expense_count));
        output.push_str(&format!("{:<16} {:>12}\n", "Highest:", money(self.highest_expense)));
        output.push_str(&format!("{:<16} {:>12}\n", "Average:", money(self.average_expense)));
        if let Some(top) = self.top_category() {
            output.push_str(&format!(
                "{:<16} {:>12} ({})\n",
                "Top Category:", top.category, money(top.total)
            ));
        }

        if let Some(alert) = self.critical_budget.as_ref().filter(|a| a.is_alerting()) {
            output.push_str(&format!(
                "\nBudget Alert: {} is at {:.0}% of its limit ({} of {})\n",
                alert.budget.category,
                alert.percentage,
                money(alert.budget.current_amount),
                money(alert.budget.limit)
            ));
        }

        if !self.categories.is_empty() {
            output.push_str("\nSpending by Category\n");
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for slice in &self.categories {
                output.push_str(&format!(
                    "{:<20} {:>12} {:>7.1}%  {}\n",
                    slice.category, money(slice.total), slice.percentage, slice.color
                ));
            }
        }

        output.push_str("\nLast 6 Months\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        let peak = self.monthly.iter().map(|b| b.total).max().unwrap_or_default();
        for bucket in &self.monthly {
            output.push_str(&format!(
                "{} {:<5} {:>12}  {}\n",
                bucket.year,
                bucket.label(),
                money(bucket.total),
                trend_bar(bucket.total, peak)
            ));
        }

        if !self.recent.is_empty() {
            output.push_str("\nRecent Expenses\n");
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for expense in &self.recent {
                output.push_str(&format!(
                    "{}  {:<28} {:>12}  {}\n",
                    expense.date(),
                    truncate(&expense.name, 28),
                    money(expense.amount),
                    expense.category_label()
                ));
            }
        }

        output
    }
}

/// Sum spend per category, keeping first-appearance order.
///
/// Expenses without a category count as "Other". Colors come from the
/// chart palette by position.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategorySlice> {
    let mut sums: Vec<(String, Money)> = Vec::new();
    for expense in expenses {
        let label = expense.category_label();
        match sums.iter().position(|(name, _)| name == label) {
            Some(idx) => sums[idx].1 += expense.amount,
            None => sums.push((label.to_string(), expense.amount)),
        }
    }

    let grand_total: Money = sums.iter().map(|(_, t)| *t).sum();

    sums.into_iter()
        .enumerate()
        .map(|(idx, (category, total))| CategorySlice {
            percentage: if grand_total.is_zero() {
                0.0
            } else {
                total.cents() as f64 / grand_total.cents() as f64 * 100.0
            },
            category,
            total,
            color: palette_color(idx),
        })
        .collect()
}

/// Spend per calendar month for the six months ending with `now`'s month.
///
/// All buckets exist even when empty; expenses outside the window are
/// ignored. Expenses are dated on `now`'s clock.
pub fn monthly_trend<Tz: TimeZone>(
    expenses: &[Expense],
    now: &DateTime<Tz>,
) -> Vec<MonthBucket> {
    let tz = now.timezone();
    let today = now.date_naive();
    let mut buckets: Vec<MonthBucket> = (0..TREND_MONTHS)
        .rev()
        .map(|back| {
            let (year, month) = months_before(today.year(), today.month(), back as i32);
            MonthBucket {
                year,
                month,
                total: Money::zero(),
            }
        })
        .collect();

    for expense in expenses {
        let date = expense.date_in(&tz);
        if let Some(bucket) = buckets.iter_mut().find(|b| b.contains(date)) {
            bucket.total += expense.amount;
        }
    }

    buckets
}

const BAR_WIDTH: i64 = 30;

fn trend_bar(total: Money, peak: Money) -> String {
    if !peak.is_positive() || !total.is_positive() {
        return String::new();
    }
    let width = (total.cents() * BAR_WIDTH / peak.cents()).max(1);
    "#".repeat(width as usize)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// The (year, month) `back` months before the given one
fn months_before(year: i32, month: u32, back: i32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) - back;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, ExpenseId};
    use chrono::{FixedOffset, Utc};

    fn expense(id: &str, cents: i64, category: Option<&str>, y: i32, m: u32, d: u32) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            name: format!("Expense {}", id),
            amount: Money::from_cents(cents),
            description: None,
            created_at: Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap(),
            category: category.map(String::from),
        }
    }

    fn budget(category: &str, limit: i64, current: i64) -> Budget {
        Budget {
            id: BudgetId::new(category),
            category: category.into(),
            limit: Money::from_cents(limit),
            current_amount: Money::from_cents(current),
            period: "Monthly".into(),
        }
    }

    fn today() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_months_before_wraps_year() {
        assert_eq!(months_before(2025, 3, 0), (2025, 3));
        assert_eq!(months_before(2025, 3, 2), (2025, 1));
        assert_eq!(months_before(2025, 3, 3), (2024, 12));
        assert_eq!(months_before(2025, 3, 5), (2024, 10));
    }

    #[test]
    fn test_trend_has_six_chronological_buckets() {
        let buckets = monthly_trend(&[], &today());
        let keys: Vec<_> = buckets.iter().map(|b| b.key()).collect();
        assert_eq!(
            keys,
            vec!["2024-10", "2024-11", "2024-12", "2025-01", "2025-02", "2025-03"]
        );
        let labels: Vec<_> = buckets.iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);
        assert!(buckets.iter().all(|b| b.total.is_zero()));
    }

    #[test]
    fn test_trend_sums_in_window_only() {
        let expenses = vec![
            expense("1", 1000, None, 2025, 3, 1),
            expense("2", 2500, None, 2025, 3, 14),
            expense("3", 700, None, 2024, 10, 31),
            expense("4", 9900, None, 2024, 9, 30),  // before window
            expense("5", 4200, None, 2025, 4, 1),   // after window
            expense("6", 300, None, 2023, 12, 5),   // same month, other year
        ];
        let buckets = monthly_trend(&expenses, &today());
        assert_eq!(buckets.len(), TREND_MONTHS);
        assert_eq!(buckets[0].total.cents(), 700);
        assert_eq!(buckets[2].total.cents(), 0);
        assert_eq!(buckets[5].total.cents(), 3500);

        let in_window: Money = buckets.iter().map(|b| b.total).sum();
        assert_eq!(in_window.cents(), 4200);
    }

    #[test]
    fn test_trend_dates_expenses_on_the_local_clock() {
        // 22:00 on March 31 in New York, already April 1 in UTC
        let late_evening = Expense {
            created_at: Utc.with_ymd_and_hms(2025, 4, 1, 2, 0, 0).unwrap(),
            ..expense("1", 1500, None, 2025, 4, 1)
        };
        let new_york = FixedOffset::west_opt(4 * 3600).unwrap();
        let now = new_york.with_ymd_and_hms(2025, 3, 31, 23, 0, 0).unwrap();

        let buckets = monthly_trend(std::slice::from_ref(&late_evening), &now);
        assert_eq!(buckets[5].key(), "2025-03");
        assert_eq!(buckets[5].total.cents(), 1500);

        let report = DashboardReport::generate(&[late_evening], &[], &now, 3);
        assert_eq!(report.trend_total(), report.total_spent);
    }

    #[test]
    fn test_category_breakdown() {
        let expenses = vec![
            expense("1", 1000, Some("Food"), 2025, 3, 1),
            expense("2", 3000, Some("Travel"), 2025, 3, 2),
            expense("3", 1000, None, 2025, 3, 3),
            expense("4", 5000, Some("Food"), 2025, 3, 4),
        ];
        let slices = category_breakdown(&expenses);
        let names: Vec<_> = slices.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Travel", "Other"]);
        assert_eq!(slices[0].total.cents(), 6000);
        assert!((slices[0].percentage - 60.0).abs() < 1e-9);
        assert_eq!(slices[0].color, palette_color(0));
        assert_eq!(slices[2].color, palette_color(2));
    }

    #[test]
    fn test_generate_summary_figures() {
        let expenses = vec![
            expense("1", 1000, Some("Food"), 2025, 3, 1),
            expense("2", 3001, Some("Travel"), 2025, 2, 2),
            expense("3", 2000, None, 2025, 1, 3),
            expense("4", 500, None, 2025, 3, 4),
        ];
        let budgets = vec![
            budget("Food", 30000, 25000),
            budget("Entertainment", 20000, 19500),
            budget("Transportation", 15000, 8500),
        ];

        let report = DashboardReport::generate(&expenses, &budgets, &today(), 3);
        assert_eq!(report.total_spent.cents(), 6501);
        assert_eq!(report.expense_count, 4);
        assert_eq!(report.highest_expense.cents(), 3001);
        assert_eq!(report.average_expense.cents(), 1625);
        assert_eq!(report.top_category().unwrap().category, "Travel");
        assert_eq!(report.trend_total(), report.total_spent);

        let recent: Vec<_> = report.recent.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(recent, vec!["4", "3", "2"]);

        let alert = report.critical_budget.unwrap();
        assert_eq!(alert.budget.category, "Entertainment");
        assert!(alert.is_alerting());
    }

    #[test]
    fn test_generate_empty() {
        let report = DashboardReport::generate(&[], &[], &today(), 3);
        assert!(report.total_spent.is_zero());
        assert!(report.average_expense.is_zero());
        assert!(report.highest_expense.is_zero());
        assert!(report.top_category().is_none());
        assert!(report.critical_budget.is_none());
        assert_eq!(report.monthly.len(), TREND_MONTHS);
    }

    #[test]
    fn test_format_terminal() {
        let expenses = vec![
            expense("1", 1000, Some("Food"), 2025, 3, 1),
            expense("2", 3000, Some("Travel"), 2025, 2, 2),
        ];
        let budgets = vec![budget("Entertainment", 20000, 19600)];
        let report = DashboardReport::generate(&expenses, &budgets, &today(), 3);
        let output = report.format_terminal("$");

        assert!(output.contains("Total Spent:"));
        assert!(output.contains("$40.00"));
        assert!(output.contains("Budget Alert: Entertainment is at 98%"));
        assert!(output.contains("Travel"));
        assert!(output.contains("Mar"));
        assert!(output.contains("Recent Expenses"));
    }

    #[test]
    fn test_trend_bar_scales_to_peak() {
        assert_eq!(trend_bar(Money::from_cents(100), Money::from_cents(100)).len(), 30);
        assert_eq!(trend_bar(Money::from_cents(50), Money::from_cents(100)).len(), 15);
        assert_eq!(trend_bar(Money::from_cents(1), Money::from_cents(100_000)).len(), 1);
        assert!(trend_bar(Money::zero(), Money::zero()).is_empty());
    }

    #[test]
    fn test_alert_threshold_is_exclusive() {
        let report =
            DashboardReport::generate(&[], &[budget("Food", 10000, 8000)], &today(), 3);
        assert!(!report.critical_budget.unwrap().is_alerting());
    }
}
