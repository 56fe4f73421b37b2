//! Authentication service
//!
//! Looks a user up by username and compares the password in plain text
//! against the stored field. There is no server-side session; a successful
//! login is remembered locally.

use tracing::{debug, info};

use crate::api::FinanceApi;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Credentials, Session};
use crate::storage::SessionStore;

/// Service for logging in and out
pub struct AuthService<'a> {
    api: &'a dyn FinanceApi,
    sessions: &'a SessionStore,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(api: &'a dyn FinanceApi, sessions: &'a SessionStore) -> Self {
        Self { api, sessions }
    }

    /// Log in with `credentials` and store the resulting session.
    ///
    /// Fails with `Validation` before any request if the form is incomplete,
    /// `AccountNotFound` when no record carries that exact username, and
    /// `InvalidCredentials` when the password differs. Transport failures
    /// pass through unchanged.
    pub async fn login(&self, credentials: &Credentials) -> SpendwiseResult<Session> {
        credentials
            .validate()
            .map_err(|e| SpendwiseError::Validation(e.to_string()))?;

        let username = credentials.username.trim();
        let candidates = self.api.find_users(username).await?;
        debug!(username, candidates = candidates.len(), "user lookup");

        // The backend filter is a substring match; only an exact username counts
        let user = candidates
            .iter()
            .find(|u| u.username == username)
            .ok_or_else(|| SpendwiseError::AccountNotFound(username.to_string()))?;

        if !credentials.matches(user) {
            return Err(SpendwiseError::InvalidCredentials(username.to_string()));
        }

        let session = Session::start(user);
        self.sessions.save(&session)?;
        info!(user_id = %session.user.id, username, "logged in");
        Ok(session)
    }

    /// The stored session, if any
    pub fn current(&self) -> SpendwiseResult<Option<Session>> {
        self.sessions.load()
    }

    /// The stored session, or `NotLoggedIn`
    pub fn require_session(&self) -> SpendwiseResult<Session> {
        self.current()?.ok_or(SpendwiseError::NotLoggedIn)
    }

    /// Forget the stored session; returns whether one existed
    pub fn logout(&self) -> SpendwiseResult<bool> {
        let existed = self.sessions.clear()?;
        if existed {
            info!("logged out");
        }
        Ok(existed)
    }
}
