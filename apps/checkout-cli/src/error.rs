//! # Application Errors
//!
//! Everything that can stop the `checkout` binary.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error ──┐                                      │
//! │  CatalogError / CheckoutError ───┼──► AppError (this module)            │
//! │  ConfigError ────────────────────┘         │                            │
//! │                                            ▼                            │
//! │                               anyhow::Error in main() → stderr          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use checkout_core::{CatalogError, CheckoutError};
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    /// A catalog or basket file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog or basket file is not valid JSON for its schema.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A `--scan` argument could not be understood.
    #[error("Invalid scan '{spec}': {reason}")]
    InvalidScan { spec: String, reason: String },

    /// Output could not be serialized.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
