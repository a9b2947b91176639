//! Cart lines and snapshot transitions.
//!
//! Every transition takes `&self` and returns a new [`Cart`], leaving the
//! original untouched. Requests that would break an invariant (unknown id,
//! duplicate id, negative quantity, a total `Decimal` can't represent)
//! produce an unchanged copy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogEntry};
use crate::types::{AddStatus, CatalogId};

/// A catalog entry the user has selected, with its quantity.
///
/// `name` and `unit_price` are copied from the catalog when the line is
/// created and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CatalogId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u64,
}

impl CartLine {
    /// Start a line for `entry` at quantity zero.
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            unit_price: entry.unit_price,
            quantity: 0,
        }
    }

    /// `unit_price * quantity`, or `None` if it overflows `Decimal`.
    #[must_use]
    pub fn checked_subtotal(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// `unit_price * quantity`.
    ///
    /// Lines built through [`Cart`] transitions never overflow; a
    /// hand-built line saturates at `Decimal::MAX`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// An ordered selection of cart lines with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// A cart with no lines.
    #[must_use]
    pub const fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    /// A cart holding every catalog entry at quantity zero, in catalog order.
    #[must_use]
    pub fn prepopulated(catalog: &Catalog) -> Self {
        Self {
            lines: catalog.iter().map(CartLine::from_entry).collect(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn get(&self, id: CatalogId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: CatalogId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a line for catalog entry `id`.
    ///
    /// Returns the resulting snapshot and what happened. Only
    /// [`AddStatus::Success`] yields a cart that differs from `self`.
    #[must_use]
    pub fn with_item(&self, catalog: &Catalog, id: CatalogId) -> (Self, AddStatus) {
        let Some(entry) = catalog.get(id) else {
            return (self.clone(), AddStatus::NotFound);
        };
        if self.contains(id) {
            return (self.clone(), AddStatus::Duplicate);
        }

        let mut lines = self.lines.clone();
        lines.push(CartLine::from_entry(entry));
        (Self { lines }, AddStatus::Success)
    }

    /// Set the quantity of line `id`.
    ///
    /// Negative targets and ids with no line leave the cart unchanged.
    #[must_use]
    pub fn with_quantity(&self, id: CatalogId, quantity: i64) -> Self {
        match u64::try_from(quantity) {
            Ok(quantity) => self.with_quantity_unsigned(id, quantity),
            Err(_) => self.clone(),
        }
    }

    /// Set the quantity of line `id` from an unsigned target.
    ///
    /// A target whose cart total would overflow `Decimal` is ignored, as is
    /// an id with no line.
    #[must_use]
    pub fn with_quantity_unsigned(&self, id: CatalogId, quantity: u64) -> Self {
        if !self.contains(id) {
            return self.clone();
        }

        let next = Self {
            lines: self
                .lines
                .iter()
                .map(|line| {
                    if line.id == id {
                        CartLine {
                            quantity,
                            ..line.clone()
                        }
                    } else {
                        line.clone()
                    }
                })
                .collect(),
        };

        if next.checked_total().is_none() {
            tracing::debug!(%id, quantity, "quantity update would overflow the cart total");
            return self.clone();
        }
        next
    }

    /// Sum of `unit_price * quantity` over all lines, or `None` on overflow.
    #[must_use]
    pub fn checked_total(&self) -> Option<Decimal> {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |sum, line| {
                sum.checked_add(line.checked_subtotal()?)
            })
    }

    /// Sum of `unit_price * quantity` over all lines.
    ///
    /// Carts built through transitions always have a representable total;
    /// a deserialized cart that doesn't saturates at `Decimal::MAX`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .fold(Decimal::ZERO, |sum, line| sum.saturating_add(line.subtotal()))
    }

    /// Sum of quantities over all lines, saturating at `u64::MAX`.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .fold(0, |count: u64, line| count.saturating_add(line.quantity))
    }
}
