//! Plain-text tables for catalog and cart output.

use cart_engine_core::{Cart, Catalog, CurrencyCode, Price};

const NAME_WIDTH: usize = 20;

/// Catalog rows: id, name, unit price.
pub fn catalog_table(catalog: &Catalog, currency: CurrencyCode) -> Vec<String> {
    let mut rows = vec![format!("{:>4}  {:<NAME_WIDTH$}  {:>10}", "ID", "Product", "Price")];
    rows.extend(catalog.iter().map(|entry| {
        format!(
            "{:>4}  {:<NAME_WIDTH$}  {:>10}",
            entry.id,
            entry.name,
            Price::new(entry.unit_price, currency).to_string()
        )
    }));
    rows
}

/// Cart rows: name, price, quantity, subtotal, then a total line.
pub fn cart_table(cart: &Cart, currency: CurrencyCode) -> Vec<String> {
    let mut rows = vec![format!(
        "{:<NAME_WIDTH$}  {:>10}  {:>8}  {:>12}",
        "Product", "Price", "Quantity", "Subtotal"
    )];

    if cart.is_empty() {
        rows.push("(no products selected)".to_string());
    }

    rows.extend(cart.lines().iter().map(|line| {
        format!(
            "{:<NAME_WIDTH$}  {:>10}  {:>8}  {:>12}",
            line.name,
            Price::new(line.unit_price, currency).to_string(),
            line.quantity,
            Price::new(line.subtotal(), currency).to_string()
        )
    }));

    rows.push(format!("Total: {}", Price::new(cart.total(), currency)));
    rows
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cart_engine_core::CatalogId;

    #[test]
    fn test_catalog_table_lists_entries() {
        let rows = catalog_table(&Catalog::demo(), CurrencyCode::USD);
        assert_eq!(rows.len(), 4);
        assert!(rows.get(1).unwrap().contains("Premium Widget"));
        assert!(rows.get(1).unwrap().contains("$99.99"));
    }

    #[test]
    fn test_cart_table_empty() {
        let rows = cart_table(&Cart::empty(), CurrencyCode::USD);
        assert!(rows.iter().any(|r| r.contains("no products selected")));
        assert_eq!(rows.last().unwrap(), "Total: $0.00");
    }

    #[test]
    fn test_cart_table_subtotals() {
        let cart = Cart::prepopulated(&Catalog::demo()).with_quantity(CatalogId::new(1), 2);
        let rows = cart_table(&cart, CurrencyCode::USD);

        let widget = rows.iter().find(|r| r.contains("Premium Widget")).unwrap();
        assert!(widget.contains("$199.98"));
        assert_eq!(rows.last().unwrap(), "Total: $199.98");
    }
}
