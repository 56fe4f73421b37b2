//! Configuration module for Spendwise
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence with environment overrides

pub mod paths;
pub mod settings;

pub use paths::SpendwisePaths;
pub use settings::Settings;
