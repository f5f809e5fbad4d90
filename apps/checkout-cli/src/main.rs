//! # Checkout CLI Entry Point
//!
//! Command-line collaborator for checkout-core.
//!
//! ## Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  checkout price   [--catalog FILE] [--basket FILE] [--scan SPEC]...     │
//! │                   [--format text|json]                                  │
//! │      load catalog ──► assemble basket ──► build_receipt ──► print       │
//! │                                                                         │
//! │  checkout catalog [--catalog FILE] [--format text|json]                 │
//! │      load catalog ──► print                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, so JSON on stdout stays clean)
//! 2. Parse arguments
//! 3. Load configuration from the environment, apply flag overrides
//! 4. Run the command

mod basket_source;
mod catalog_source;
mod config;
mod error;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use checkout_core::build_receipt;

use crate::basket_source::assemble_basket;
use crate::catalog_source::load_catalog;
use crate::config::{CheckoutConfig, OutputFormat};
use crate::output::{render_catalog, render_receipt, IssuedReceipt};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,checkout=debug";

/// Prices shopping baskets against a catalog.
#[derive(Parser, Debug)]
#[command(name = "checkout", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a basket and print the receipt
    Price(PriceArgs),

    /// Print the catalog
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Catalog JSON file (overrides CHECKOUT_CATALOG_PATH)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format (overrides CHECKOUT_OUTPUT_FORMAT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Args, Debug)]
struct PriceArgs {
    #[command(flatten)]
    common: CatalogArgs,

    /// Basket JSON file: an array of {"item", "quantity"} / {"item", "weight"}
    #[arg(long)]
    basket: Option<PathBuf>,

    /// A single scan: NAME, NAME=QTY or NAME@WEIGHT (repeatable)
    #[arg(long = "scan", value_name = "SPEC")]
    scans: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let env_config = CheckoutConfig::load().context("Failed to load configuration")?;

    let result = match cli.command {
        Command::Price(args) => run_price(env_config, args),
        Command::Catalog(args) => run_catalog(env_config, args),
    };

    if let Err(err) = &result {
        warn!(error = %err, "Checkout failed");
    }
    result
}

fn run_price(env_config: CheckoutConfig, args: PriceArgs) -> Result<()> {
    let config = env_config.with_overrides(args.common.catalog, args.common.format);
    info!(
        catalog = ?config.catalog_path,
        format = %config.output_format,
        "Configuration loaded"
    );

    let catalog = load_catalog(config.catalog_path.as_deref())?;
    let basket = assemble_basket(args.basket.as_deref(), &args.scans)?;
    info!(scans = basket.len(), "Basket assembled");

    let receipt = build_receipt(basket.entries(), &catalog)?;
    let issued = IssuedReceipt::new(receipt);
    info!(
        receipt_id = %issued.id,
        lines = issued.receipt.line_count(),
        total = %issued.receipt.total(),
        "Receipt built"
    );

    println!("{}", render_receipt(&issued, config.output_format)?);
    Ok(())
}

fn run_catalog(env_config: CheckoutConfig, args: CatalogArgs) -> Result<()> {
    let config = env_config.with_overrides(args.catalog, args.format);

    let catalog = load_catalog(config.catalog_path.as_deref())?;
    println!("{}", render_catalog(&catalog, config.output_format)?);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=checkout=trace` - Trace this binary only
/// - Default: INFO, DEBUG for this binary
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Log target of this binary's own events.
    const BINARY_TARGET: &str = env!("CARGO_BIN_NAME");

    #[test]
    fn test_default_log_filter_targets_this_binary() {
        assert!(DEFAULT_LOG_FILTER.parse::<EnvFilter>().is_ok());
        assert!(DEFAULT_LOG_FILTER
            .split(',')
            .any(|directive| directive == format!("{BINARY_TARGET}=debug")));
    }

    #[test]
    fn test_cli_parses_repeated_scans() {
        let cli = Cli::parse_from([
            "checkout", "price", "--scan", "Apple=2", "--scan", "Banana@0.5", "--format", "json",
        ]);
        match cli.command {
            Command::Price(args) => {
                assert_eq!(args.scans, ["Apple=2", "Banana@0.5"]);
                assert_eq!(args.common.format, Some(OutputFormat::Json));
            }
            other => panic!("expected price command, got {other:?}"),
        }
    }
}
