//! User settings for Spendwise
//!
//! Manages the backend location, request timeout and display preferences.

use serde::{Deserialize, Serialize};

use super::paths::SpendwisePaths;
use crate::error::SpendwiseError;

/// Environment variable that overrides `api_base_url`
pub const API_URL_ENV: &str = "SPENDWISE_API_URL";

/// User settings for Spendwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the mock finance API (without trailing slash)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds; no timeout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of recent expenses shown on the dashboard
    #[serde(default = "default_recent_expense_count")]
    pub recent_expense_count: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_expense_count() -> usize {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: None,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_expense_count: default_recent_expense_count(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendwisePaths) -> Result<Self, SpendwiseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendwiseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendwiseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Apply environment overrides on top of the loaded values
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().to_string();
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendwisePaths) -> Result<(), SpendwiseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendwiseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendwiseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Write the defaults if no settings file exists yet; returns whether one was written
    pub fn create_if_missing(paths: &SpendwisePaths) -> Result<bool, SpendwiseError> {
        if paths.settings_file().exists() {
            return Ok(false);
        }
        Settings::default().save(paths)?;
        Ok(true)
    }

    /// Request timeout as a `Duration`, if configured
    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        self.request_timeout_secs.map(std::time::Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:3000");
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.recent_expense_count, 3);
        assert!(settings.request_timeout().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.api_base_url = "https://example.mockapi.io/api/v1".into();
        settings.request_timeout_secs = Some(15);
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.api_base_url, "https://example.mockapi.io/api/v1");
        assert_eq!(
            loaded.request_timeout(),
            Some(std::time::Duration::from_secs(15))
        );
    }

    #[test]
    fn test_create_if_missing_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(Settings::create_if_missing(&paths).unwrap());
        assert!(paths.settings_file().exists());

        let mut settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.api_base_url, "http://localhost:3000");
        settings.currency_symbol = "RWF ".into();
        settings.save(&paths).unwrap();

        assert!(!Settings::create_if_missing(&paths).unwrap());
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "RWF ");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"currency_symbol": "RWF "}"#).unwrap();
        assert_eq!(loaded.currency_symbol, "RWF ");
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert_eq!(loaded.schema_version, 1);
    }
}
