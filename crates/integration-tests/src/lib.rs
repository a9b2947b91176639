//! Integration tests for the cart engine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cart-engine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end user flows from the product page
//! - `cart_properties` - Invariants checked over many operation sequences
//! - `catalog_config` - Catalog files and initialization modes
//!
//! This crate only exposes fixtures shared by the test files.

use cart_engine_core::{CartEngine, Catalog, CatalogEntry, InitMode, RecordingNotifier};
use rust_decimal::Decimal;

/// Catalog with the two entries used throughout the scenarios.
///
/// # Panics
///
/// Panics if the fixture entries stop forming a valid catalog.
#[must_use]
pub fn two_item_catalog() -> Catalog {
    Catalog::new(vec![
        CatalogEntry::new(1, "Premium Widget", Decimal::new(9999, 2)),
        CatalogEntry::new(2, "Basic Gadget", Decimal::new(4999, 2)),
    ])
    .expect("two-item fixture catalog is valid")
}

/// Engine over `catalog` with a recorder the test keeps a handle to.
#[must_use]
pub fn engine_with(
    catalog: Catalog,
    mode: InitMode,
) -> (CartEngine<RecordingNotifier>, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    (CartEngine::new(catalog, mode, notifier.clone()), notifier)
}
