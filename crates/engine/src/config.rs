//! Application configuration loaded from the environment.
//!
//! Variables (all optional):
//! - `FORMACAO_LOG` - tracing filter used when `RUST_LOG` is unset
//! - `FORMACAO_REPORT_FORMAT` - `text` (default) or `json`

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Filter applied when neither `RUST_LOG` nor `FORMACAO_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "formacao_engine=info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid report format '{0}'. Valid values: text, json")]
    InvalidReportFormat(String),
}

/// How program reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::InvalidReportFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_filter: String,
    pub report_format: ReportFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            report_format: ReportFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let log_filter = get("FORMACAO_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let report_format = match get("FORMACAO_REPORT_FORMAT") {
            Some(raw) => raw.parse::<ReportFormat>()?,
            None => ReportFormat::default(),
        };

        Ok(Self {
            log_filter,
            report_format,
        })
    }
}
