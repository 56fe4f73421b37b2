//! HTTP client for the mock finance API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::FinanceApi;
use crate::config::Settings;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Budget, Expense, ExpenseId, NewBudget, NewExpense, User};

/// reqwest-backed implementation of [`FinanceApi`]
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    /// Create a client for `base_url`, with an optional per-request timeout
    pub fn new(base_url: &str, timeout: Option<Duration>) -> SpendwiseResult<Self> {
        let base_url = Url::parse(base_url.trim()).map_err(|e| {
            SpendwiseError::Config(format!("Invalid API base URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SpendwiseError::Config(format!(
                "Invalid API base URL '{}'",
                base_url
            )));
        }

        let mut builder =
            Client::builder().user_agent(concat!("spendwise/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            SpendwiseError::Config(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, base_url })
    }

    /// Create a client from the user's settings
    pub fn from_settings(settings: &Settings) -> SpendwiseResult<Self> {
        Self::new(&settings.api_base_url, settings.request_timeout())
    }

    /// Base URL with `segments` appended as path segments
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> SpendwiseResult<reqwest::Response> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "request failed");
            SpendwiseError::from(e)
        })?;

        let status = response.status();
        debug!(url = %response.url(), %status, "response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            body.trim().to_string()
        };
        warn!(%status, %message, "API returned an error");
        Err(SpendwiseError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Send and decode a JSON body.
    ///
    /// A success response whose body does not decode counts as a failed
    /// request, the same as a transport error.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> SpendwiseResult<T> {
        let response = self.send(request).await?;
        let url = response.url().clone();
        response.json::<T>().await.map_err(|e| {
            warn!(%url, error = %e, "unexpected response body");
            SpendwiseError::Network(format!("Unexpected response body from {}: {}", url, e))
        })
    }
}

#[async_trait]
impl FinanceApi for HttpApi {
    async fn find_users(&self, username: &str) -> SpendwiseResult<Vec<User>> {
        let url = self.endpoint(&["users"]);
        debug!(%url, username, "looking up user");

        let request = self.client.get(url).query(&[("username", username)]);
        match self.send_json(request).await {
            // mockapi answers an empty filter with 404
            Err(SpendwiseError::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(Vec::new())
            }
            other => other,
        }
    }

    async fn list_expenses(&self) -> SpendwiseResult<Vec<Expense>> {
        let url = self.endpoint(&["expenses"]);
        debug!(%url, "fetching expenses");
        self.send_json(self.client.get(url)).await
    }

    async fn create_expense(&self, expense: &NewExpense) -> SpendwiseResult<Expense> {
        let url = self.endpoint(&["expenses"]);
        debug!(%url, name = %expense.name, "creating expense");
        self.send_json(self.client.post(url).json(expense)).await
    }

    async fn delete_expense(&self, id: &ExpenseId) -> SpendwiseResult<()> {
        let url = self.endpoint(&["expenses", id.as_str()]);
        debug!(%url, "deleting expense");
        self.send(self.client.delete(url)).await.map(|_| ())
    }

    async fn list_budgets(&self) -> SpendwiseResult<Vec<Budget>> {
        let url = self.endpoint(&["budgets"]);
        debug!(%url, "fetching budgets");
        self.send_json(self.client.get(url)).await
    }

    async fn create_budget(&self, budget: &NewBudget) -> SpendwiseResult<Budget> {
        let url = self.endpoint(&["budgets"]);
        debug!(%url, category = %budget.category, "creating budget");
        self.send_json(self.client.post(url).json(budget)).await
    }
}
