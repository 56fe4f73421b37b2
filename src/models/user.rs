//! User and session models
//!
//! The mock API returns user records with the password in plain text. The
//! session keeps everything except the password.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// Placeholder token; the mock API never issues one
pub const MOCK_TOKEN: &str = "mock-jwt-token";

/// Minimum password length accepted by the login form
pub const MIN_PASSWORD_LEN: usize = 6;

/// A user record as stored by the mock API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

/// The signed-in user, minus the password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub name: String,
}

impl SessionUser {
    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "User"
        } else {
            &self.name
        }
    }
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}

/// A client-side session established by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub token: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Start a session for `user`
    pub fn start(user: &User) -> Self {
        Self {
            user: SessionUser::from(user),
            token: MOCK_TOKEN.to_string(),
            logged_in_at: Utc::now(),
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) since {}",
            self.user.display_name(),
            self.user.username,
            self.logged_in_at.format("%Y-%m-%d %H:%M UTC")
        )
    }
}

/// Login form input
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Validation error for the login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    MissingUsername,
    MissingPassword,
    PasswordTooShort,
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUsername => write!(f, "Username is required"),
            Self::MissingPassword => write!(f, "Password is required"),
            Self::PasswordTooShort => write!(
                f,
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ),
        }
    }
}

impl std::error::Error for CredentialsError {}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check the form before any request is made
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.username.trim().is_empty() {
            return Err(CredentialsError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(CredentialsError::MissingPassword);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialsError::PasswordTooShort);
        }
        Ok(())
    }

    /// Whether `user` is the record these credentials name and unlock
    pub fn matches(&self, user: &User) -> bool {
        user.username == self.username.trim() && user.password == self.password
    }
}
