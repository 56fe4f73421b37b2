//! Export module for Spendwise
//!
//! Writes the fetched expense list, newest first, in one of three formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable, with a small metadata envelope
//! - YAML: the same document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::str::FromStr;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_expenses_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_expenses_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!(
                "Unknown export format '{}'. Use csv, json or yaml.",
                other
            )),
        }
    }
}
