//! Spendwise - personal expense tracking from the command line
//!
//! This library provides the client side of the Spendwise expense tracker:
//! signing in against a mock REST backend, recording and searching expenses,
//! following budget limits and summarising spending on a dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types and user-facing messages
//! - `models`: Records exchanged with the backend (users, expenses, budgets)
//! - `api`: The backend trait, its HTTP client and an in-memory stand-in
//! - `storage`: JSON file helpers and the local session file
//! - `services`: Login, expense and budget stores
//! - `reports`: The dashboard aggregation
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use spendwise::api::HttpApi;
//! use spendwise::config::{SpendwisePaths, Settings};
//!
//! let paths = SpendwisePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let api = HttpApi::from_settings(&settings)?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendwiseError, SpendwiseResult};
