//! The static product catalog.
//!
//! The catalog is configuration data handed to the engine. It is validated
//! once at construction and never changes afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::CatalogId;

/// Errors raised while building a [`Catalog`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate catalog id {0}")]
    DuplicateId(CatalogId),
    #[error("catalog entry {id} has a negative price ({price})")]
    NegativePrice { id: CatalogId, price: Decimal },
}

/// A purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: CatalogId,
    pub name: String,
    pub unit_price: Decimal,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(id: impl Into<CatalogId>, name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }
}

/// An ordered, immutable list of catalog entries with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative prices.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two entries share an id and
    /// [`CatalogError::NegativePrice`] if any price is below zero.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.unit_price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    id: entry.id,
                    price: entry.unit_price,
                });
            }
            if entries.iter().take(index).any(|prior| prior.id == entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in demo catalog shown on the product selection page.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new(1, "Premium Widget", Decimal::new(9999, 2)),
                CatalogEntry::new(2, "Basic Gadget", Decimal::new(4999, 2)),
                CatalogEntry::new(3, "Deluxe Package", Decimal::new(19999, 2)),
            ],
        }
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: CatalogId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: CatalogId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<CatalogEntry>::deserialize(deserializer)?;
        Self::new(entries).map_err(serde::de::Error::custom)
    }
}
