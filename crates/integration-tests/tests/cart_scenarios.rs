//! End-to-end flows a shopper goes through on the product page.

use cart_engine_core::{AddStatus, CatalogId, CheckoutStatus, InitMode};
use cart_engine_integration_tests::{engine_with, two_item_catalog};
use rust_decimal_macros::dec;

// =============================================================================
// Add -> set quantity -> checkout
// =============================================================================

#[test]
fn test_add_set_total_checkout() {
    let (mut engine, notifier) = engine_with(two_item_catalog(), InitMode::Empty);

    let added = engine.add_item(CatalogId::new(1));
    assert_eq!(added.status, AddStatus::Success);
    assert!(added.message.contains("Premium Widget"));

    let line = engine.cart().get(CatalogId::new(1)).cloned();
    assert_eq!(line.map(|l| l.quantity), Some(0));

    engine.update_quantity(CatalogId::new(1), 3);
    assert_eq!(engine.compute_total(), dec!(299.97));

    let checkout = engine.checkout();
    assert_eq!(checkout.status, CheckoutStatus::Success);
    assert!(checkout.message.contains("299.97"));

    let titles: Vec<String> = notifier
        .notifications()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, vec!["Added to cart", "Order Placed!"]);
}

#[test]
fn test_checkout_two_lines() {
    let (mut engine, _) = engine_with(two_item_catalog(), InitMode::Empty);
    engine.add_item(CatalogId::new(1));
    engine.add_item(CatalogId::new(2));
    engine.update_quantity(CatalogId::new(1), 2);
    engine.update_quantity(CatalogId::new(2), 1);

    assert_eq!(engine.compute_total(), dec!(249.97));
    let checkout = engine.checkout();
    assert_eq!(checkout.status, CheckoutStatus::Success);
    assert!(checkout.message.contains("249.97"));
}

// =============================================================================
// Rejected requests
// =============================================================================

#[test]
fn test_adding_twice_reports_duplicate() {
    let (mut engine, notifier) = engine_with(two_item_catalog(), InitMode::Empty);

    engine.add_item(CatalogId::new(1));
    let second = engine.add_item(CatalogId::new(1));

    assert_eq!(second.status, AddStatus::Duplicate);
    assert_eq!(engine.cart().len(), 1);
    assert!(notifier.last().is_some_and(|n| n.is_destructive()));
}

#[test]
fn test_negative_quantity_keeps_previous_value() {
    let (mut engine, _) = engine_with(two_item_catalog(), InitMode::Empty);
    engine.add_item(CatalogId::new(1));
    engine.update_quantity(CatalogId::new(1), 2);

    let snapshot = engine.update_quantity(CatalogId::new(1), -1);

    assert_eq!(
        snapshot.get(CatalogId::new(1)).map(|l| l.quantity),
        Some(2)
    );
}

#[test]
fn test_checkout_with_nothing_selected() {
    let (engine, notifier) = engine_with(two_item_catalog(), InitMode::Empty);

    let checkout = engine.checkout();

    assert_eq!(checkout.status, CheckoutStatus::ValidationFailure);
    assert_eq!(checkout.message, "Please select at least one product");
    assert!(notifier.last().is_some_and(|n| n.title == "Error"));
}

#[test]
fn test_checkout_after_zeroing_quantities() {
    let (mut engine, _) = engine_with(two_item_catalog(), InitMode::Prepopulated);
    engine.increment(CatalogId::new(2));
    engine.decrement(CatalogId::new(2));

    assert_eq!(engine.checkout().status, CheckoutStatus::ValidationFailure);
}

// =============================================================================
// Prepopulated page
// =============================================================================

#[test]
fn test_prepopulated_page_buttons() {
    let (mut engine, _) = engine_with(two_item_catalog(), InitMode::Prepopulated);

    engine.increment(CatalogId::new(1));
    engine.increment(CatalogId::new(1));
    engine.increment(CatalogId::new(2));
    engine.decrement(CatalogId::new(2));
    engine.decrement(CatalogId::new(2));

    assert_eq!(engine.compute_total(), dec!(199.98));
    assert_eq!(engine.item_count(), 2);
    assert_eq!(engine.formatted_total(), "$199.98");
}

// =============================================================================
// Fixtures and large quantities
// =============================================================================

#[test]
fn test_fixture_catalog_has_both_entries() {
    let catalog = two_item_catalog();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains(CatalogId::new(1)));
    assert!(catalog.contains(CatalogId::new(2)));
}

#[test]
fn test_quantity_beyond_u32_range() {
    let (mut engine, _) = engine_with(two_item_catalog(), InitMode::Prepopulated);

    engine.update_quantity(CatalogId::new(2), i64::from(u32::MAX));
    let snapshot = engine.increment(CatalogId::new(2));

    assert_eq!(
        snapshot.get(CatalogId::new(2)).map(|l| l.quantity),
        Some(4_294_967_296)
    );
    assert_eq!(engine.item_count(), 4_294_967_296);
    assert_eq!(engine.checkout().status, CheckoutStatus::Success);
}
