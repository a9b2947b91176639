//! List the configured catalog.

use cart_engine_core::{Catalog, CurrencyCode, EngineConfig};
use serde::Serialize;
use tracing::info;

use crate::error::CliError;
use crate::render;

/// The catalog as emitted by `catalog --json`.
#[derive(Debug, Serialize)]
pub struct CatalogListing<'a> {
    pub currency: CurrencyCode,
    pub entries: &'a Catalog,
}

/// Log every catalog entry with its display price.
pub fn list(config: &EngineConfig) {
    info!(entries = config.catalog.len(), currency = %config.currency, "Catalog");
    for row in render::catalog_table(&config.catalog, config.currency) {
        info!("{row}");
    }
}

/// Serialize the configured catalog.
///
/// # Errors
///
/// Returns `CliError::Json` if serialization fails.
pub fn to_json(config: &EngineConfig) -> Result<String, CliError> {
    let listing = CatalogListing {
        currency: config.currency,
        entries: &config.catalog,
    };
    Ok(serde_json::to_string_pretty(&listing)?)
}

/// Print the configured catalog as JSON on stdout.
///
/// # Errors
///
/// Returns `CliError::Json` if serialization fails.
#[allow(clippy::print_stdout)]
pub fn print_json(config: &EngineConfig) -> Result<(), CliError> {
    let json = to_json(config)?;
    println!("{json}");
    Ok(())
}
