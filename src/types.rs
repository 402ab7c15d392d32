//! Core types and errors for the script inventory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a run.
///
/// Malformed input lines never produce an error; they are skipped or
/// recorded with an explanatory note.
#[derive(Error, Debug)]
pub enum ScriptMapError {
    #[error("failed to read input {path:?}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScriptMapError>;

/// Vendor/purpose category of a script.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Analytics,
    Ads,
    #[serde(rename = "cdn/library")]
    CdnLibrary,
    Payment,
    Social,
    Monitoring,
    Maps,
    /// No rule matched.
    Generic,
}

impl Category {
    /// Label used in reports and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Analytics => "analytics",
            Category::Ads => "ads",
            Category::CdnLibrary => "cdn/library",
            Category::Payment => "payment",
            Category::Social => "social",
            Category::Monitoring => "monitoring",
            Category::Maps => "maps",
            Category::Generic => "generic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified script reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptRecord {
    /// The trimmed input line the URL came from.
    pub raw: String,
    /// The extracted URL, before normalization.
    pub url: String,
    pub scheme: String,
    /// Lower-cased host; empty when none could be parsed.
    pub host: String,
    pub path: String,
    pub category: Category,
    /// The rule pattern that matched, empty for generic entries.
    pub subcategory: String,
    pub first_party: bool,
    /// Advisory annotations, in the order they were produced.
    pub notes: Vec<String>,
}

impl ScriptRecord {
    /// Host for display, with a placeholder when the URL had none.
    pub fn domain_label(&self) -> &str {
        if self.host.is_empty() {
            "(no host)"
        } else {
            &self.host
        }
    }

    pub fn party_label(&self) -> &'static str {
        if self.first_party {
            "First-party"
        } else {
            "Third-party"
        }
    }
}
