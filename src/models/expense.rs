//! Expense model
//!
//! Expenses are created client-side, stored by the mock API and listed back.
//! There is no update operation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::category::{category_color, category_label, HexColor};
use super::ids::ExpenseId;
use super::money::Money;

/// An expense record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,

    /// Short title, e.g. "Grocery Shopping"
    pub name: String,

    pub amount: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Expense {
    /// Case-insensitive substring match on name or description.
    ///
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }

    /// Category for display ("Other" when missing)
    pub fn category_label(&self) -> &str {
        category_label(self.category.as_deref())
    }

    /// Pill color for this expense's category
    pub fn color(&self) -> HexColor {
        category_color(self.category_label())
    }

    /// Calendar date the expense was made
    pub fn date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Calendar date the expense was made, as seen on a clock in `tz`
    pub fn date_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.created_at.with_timezone(tz).date_naive()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date(), self.name, self.amount)
    }
}

/// Body of `POST /expenses`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub name: String,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Raw form input for a new expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: String,
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Validation error for the expense form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingTitle,
    MissingAmount,
    InvalidAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Title is required"),
            Self::MissingAmount => write!(f, "Amount is required"),
            Self::InvalidAmount => write!(f, "Please enter a valid amount"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

impl ExpenseDraft {
    /// Validate the form and build the request body.
    ///
    /// The title must be non-empty and the amount a positive number. The date
    /// defaults to now.
    pub fn validate(self) -> Result<NewExpense, ExpenseValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ExpenseValidationError::MissingTitle);
        }

        if self.amount.trim().is_empty() {
            return Err(ExpenseValidationError::MissingAmount);
        }
        let amount =
            Money::parse(&self.amount).map_err(|_| ExpenseValidationError::InvalidAmount)?;
        if !amount.is_positive() {
            return Err(ExpenseValidationError::InvalidAmount);
        }

        Ok(NewExpense {
            name: title.to_string(),
            amount,
            created_at: self.date.unwrap_or_else(Utc::now),
            description: non_blank(self.description),
            category: non_blank(self.category),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Timestamp as it may arrive from the API
#[derive(Deserialize)]
#[serde(untagged)]
enum WireTimestamp {
    Text(String),
    Seconds(i64),
}

/// Parse an ISO-8601 timestamp, a bare `YYYY-MM-DD` date or a naive
/// date-time (taken as UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    match WireTimestamp::deserialize(deserializer)? {
        WireTimestamp::Text(s) => parse_timestamp(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", s))),
        WireTimestamp::Seconds(secs) => Utc
            .timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", secs))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn expense(name: &str, description: Option<&str>) -> Expense {
        Expense {
            id: ExpenseId::new("1"),
            name: name.into(),
            amount: Money::from_cents(1000),
            description: description.map(String::from),
            created_at: Utc::now(),
            category: None,
        }
    }

    #[test]
    fn test_matches_query() {
        let e = expense("Grocery Shopping", Some("Weekly FARMERS market"));
        assert!(e.matches_query("grocery"));
        assert!(e.matches_query("SHOP"));
        assert!(e.matches_query("farmers"));
        assert!(e.matches_query(""));
        assert!(!e.matches_query("rent"));

        let bare = expense("Taxi", None);
        assert!(!bare.matches_query("market"));
    }

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "id": "4",
            "name": "Lunch",
            "amount": "12.50",
            "description": null,
            "createdAt": "2025-05-03T09:15:00.000Z"
        }"#;
        let e: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(e.id.as_str(), "4");
        assert_eq!(e.amount.cents(), 1250);
        assert_eq!(e.description, None);
        assert_eq!(e.date(), NaiveDate::from_ymd_opt(2025, 5, 3).unwrap());
        assert_eq!(e.category_label(), "Other");
    }

    #[test]
    fn test_date_in_follows_the_clock() {
        let mut e = expense("Dinner", None);
        e.created_at = Utc.with_ymd_and_hms(2025, 4, 1, 2, 0, 0).unwrap();
        let new_york = FixedOffset::west_opt(4 * 3600).unwrap();

        assert_eq!(e.date(), NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        assert_eq!(e.date_in(&Utc), e.date());
        assert_eq!(
            e.date_in(&new_york),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
        );
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2025-05-03").is_some());
        assert!(parse_timestamp("2025-05-03T10:00:00").is_some());
        assert!(parse_timestamp("2025-05-03T10:00:00+02:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());

        let from_secs: Expense = serde_json::from_str(
            r#"{"id": 1, "name": "x", "amount": 1, "createdAt": 1714723200}"#,
        )
        .unwrap();
        assert_eq!(
            from_secs.date(),
            NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()
        );
    }

    #[test]
    fn test_draft_validation() {
        let missing_title = ExpenseDraft {
            title: "  ".into(),
            amount: "10".into(),
            ..Default::default()
        };
        assert_eq!(
            missing_title.validate(),
            Err(ExpenseValidationError::MissingTitle)
        );

        let missing_amount = ExpenseDraft {
            title: "Taxi".into(),
            ..Default::default()
        };
        assert_eq!(
            missing_amount.validate(),
            Err(ExpenseValidationError::MissingAmount)
        );

        for bad in ["abc", "0", "-5", "0.00"] {
            let draft = ExpenseDraft {
                title: "Taxi".into(),
                amount: bad.into(),
                ..Default::default()
            };
            assert_eq!(draft.validate(), Err(ExpenseValidationError::InvalidAmount));
        }
    }

    #[test]
    fn test_draft_rejects_amount_too_large_to_store() {
        let draft = ExpenseDraft {
            title: "Car".into(),
            amount: "99999999999999999".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(ExpenseValidationError::InvalidAmount));
    }

    #[test]
    fn test_draft_builds_request() {
        let draft = ExpenseDraft {
            title: " Taxi ".into(),
            amount: "18.4".into(),
            date: parse_timestamp("2025-06-01"),
            description: Some("".into()),
            category: Some("Transportation".into()),
        };
        let new = draft.validate().unwrap();
        assert_eq!(new.name, "Taxi");
        assert_eq!(new.amount.cents(), 1840);
        assert_eq!(new.description, None);

        let body = serde_json::to_value(&new).unwrap();
        assert_eq!(body["amount"], "18.40");
        assert_eq!(body["category"], "Transportation");
        assert!(body["createdAt"].as_str().unwrap().starts_with("2025-06-01T00:00:00"));
        assert!(body.get("description").is_none());
    }
}
