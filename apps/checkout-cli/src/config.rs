//! # Configuration
//!
//! Settings are read from environment variables; command-line flags win
//! over them.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                               │
//! │     --catalog ./prices.json --format json                               │
//! │                                                                         │
//! │  2. Environment Variables                                               │
//! │     CHECKOUT_CATALOG_PATH=./prices.json                                 │
//! │     CHECKOUT_OUTPUT_FORMAT=json                                         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     built-in price list, text output                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logging is configured separately through `RUST_LOG`.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const ENV_CATALOG_PATH: &str = "CHECKOUT_CATALOG_PATH";
pub const ENV_OUTPUT_FORMAT: &str = "CHECKOUT_OUTPUT_FORMAT";

// =============================================================================
// Output Format
// =============================================================================

/// How receipts and catalogs are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_OUTPUT_FORMAT.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

// =============================================================================
// Checkout Config
// =============================================================================

/// Resolved application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Catalog JSON file; `None` means the built-in price list.
    pub catalog_path: Option<PathBuf>,

    /// Output format for stdout.
    pub output_format: OutputFormat,
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let output_format = match read(ENV_OUTPUT_FORMAT) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        Ok(CheckoutConfig {
            catalog_path: read(ENV_CATALOG_PATH).map(PathBuf::from),
            output_format,
        })
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        catalog_path: Option<PathBuf>,
        output_format: Option<OutputFormat>,
    ) -> Self {
        if catalog_path.is_some() {
            self.catalog_path = catalog_path;
        }
        if let Some(format) = output_format {
            self.output_format = format;
        }
        self
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
