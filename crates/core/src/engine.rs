//! The cart engine consumed by presentation layers.
//!
//! [`CartEngine`] owns the catalog and the current [`Cart`] snapshot. Each
//! mutating call computes a new snapshot with the pure transitions in
//! [`crate::cart`] and swaps it in; callers that hold an older snapshot keep
//! seeing the old state.
//!
//! Invalid requests are never errors. Negative quantities and unknown update
//! targets are ignored, while duplicate adds and empty checkouts come back as
//! statuses and are also announced through the injected [`Notifier`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::cart::Cart;
use crate::catalog::{Catalog, CatalogEntry};
use crate::config::{EngineConfig, InitMode};
use crate::notify::{Notification, Notifier};
use crate::types::{AddStatus, CatalogId, CheckoutStatus, CurrencyCode, Price};

/// Message shown when checkout is attempted with nothing selected.
pub const EMPTY_CHECKOUT_MESSAGE: &str = "Please select at least one product";

/// What happened when adding an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOutcome {
    pub status: AddStatus,
    pub message: String,
}

/// What happened when checking out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOutcome {
    pub status: CheckoutStatus,
    pub message: String,
    /// The total the decision was based on.
    pub total: Decimal,
}

/// Owns a catalog and the current cart, and emits notifications.
pub struct CartEngine<N> {
    catalog: Catalog,
    cart: Cart,
    mode: InitMode,
    currency: CurrencyCode,
    notifier: N,
}

impl<N: Notifier> CartEngine<N> {
    /// Create an engine priced in the default currency.
    pub fn new(catalog: Catalog, mode: InitMode, notifier: N) -> Self {
        let cart = match mode {
            InitMode::Empty => Cart::empty(),
            InitMode::Prepopulated => Cart::prepopulated(&catalog),
        };
        debug!(?mode, entries = catalog.len(), lines = cart.len(), "cart engine created");

        Self {
            catalog,
            cart,
            mode,
            currency: CurrencyCode::default(),
            notifier,
        }
    }

    /// Create an engine from loaded configuration.
    pub fn from_config(config: EngineConfig, notifier: N) -> Self {
        Self::new(config.catalog, config.init_mode, notifier).with_currency(config.currency)
    }

    /// Use `currency` when formatting totals in messages.
    #[must_use]
    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = currency;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current snapshot.
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub const fn mode(&self) -> InitMode {
        self.mode
    }

    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Catalog entries that are not in the cart yet, for a picker.
    pub fn available_entries(&self) -> Vec<&CatalogEntry> {
        self.catalog
            .iter()
            .filter(|entry| !self.cart.contains(entry.id))
            .collect()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Add catalog entry `id` to the cart at quantity zero.
    #[instrument(skip(self), level = "debug")]
    pub fn add_item(&mut self, id: CatalogId) -> AddOutcome {
        let (cart, status) = self.cart.with_item(&self.catalog, id);
        self.cart = cart;

        let name = self
            .catalog
            .get(id)
            .map_or_else(String::new, |entry| entry.name.clone());

        let outcome = match status {
            AddStatus::Success => {
                let message = format!("{name} added to cart");
                self.notifier
                    .notify(Notification::new("Added to cart", message.clone()));
                AddOutcome { status, message }
            }
            AddStatus::Duplicate => {
                let message = format!("{name} is already in your cart");
                self.notifier
                    .notify(Notification::destructive("Already in cart", message.clone()));
                AddOutcome { status, message }
            }
            AddStatus::NotFound => AddOutcome {
                status,
                message: format!("No product with id {id}"),
            },
        };

        debug!(%status, lines = self.cart.len(), "add item");
        outcome
    }

    /// Set the quantity of line `id`, returning the new snapshot.
    ///
    /// Negative quantities and ids without a line leave the cart as it was.
    #[instrument(skip(self), level = "debug")]
    pub fn update_quantity(&mut self, id: CatalogId, quantity: i64) -> Cart {
        let next = self.cart.with_quantity(id, quantity);
        if next == self.cart {
            debug!("quantity update ignored");
        }
        self.cart = next;
        self.cart.clone()
    }

    /// Raise line `id` by one.
    pub fn increment(&mut self, id: CatalogId) -> Cart {
        let target = self
            .cart
            .get(id)
            .and_then(|line| line.quantity.checked_add(1));
        self.step_quantity(id, target)
    }

    /// Lower line `id` by one. A line already at zero stays at zero.
    pub fn decrement(&mut self, id: CatalogId) -> Cart {
        let target = self
            .cart
            .get(id)
            .and_then(|line| line.quantity.checked_sub(1));
        self.step_quantity(id, target)
    }

    /// Sum of `unit_price * quantity` over all lines.
    pub fn compute_total(&self) -> Decimal {
        self.cart.total()
    }

    /// The total formatted with the engine's currency symbol, e.g. `$299.97`.
    pub fn formatted_total(&self) -> String {
        Price::new(self.compute_total(), self.currency).to_string()
    }

    /// Sum of quantities, for a cart badge.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Subtotal for line `id`, if present.
    pub fn line_subtotal(&self, id: CatalogId) -> Option<Decimal> {
        self.cart.get(id).map(crate::cart::CartLine::subtotal)
    }

    /// Validate the cart total and report the result. Never changes the cart.
    #[instrument(skip(self), level = "debug")]
    pub fn checkout(&self) -> CheckoutOutcome {
        let total = self.compute_total();

        let outcome = if total > Decimal::ZERO {
            let message = format!("Total amount: {}", Price::new(total, self.currency));
            self.notifier
                .notify(Notification::new("Order Placed!", message.clone()));
            CheckoutOutcome {
                status: CheckoutStatus::Success,
                message,
                total,
            }
        } else {
            self.notifier
                .notify(Notification::destructive("Error", EMPTY_CHECKOUT_MESSAGE));
            CheckoutOutcome {
                status: CheckoutStatus::ValidationFailure,
                message: EMPTY_CHECKOUT_MESSAGE.to_string(),
                total,
            }
        };

        debug!(status = %outcome.status, %total, "checkout");
        outcome
    }

    #[instrument(skip(self), level = "debug")]
    fn step_quantity(&mut self, id: CatalogId, target: Option<u64>) -> Cart {
        match target {
            Some(quantity) => self.cart = self.cart.with_quantity_unsigned(id, quantity),
            None => debug!("quantity step ignored"),
        }
        self.cart.clone()
    }
}

impl<N> std::fmt::Debug for CartEngine<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartEngine")
            .field("mode", &self.mode)
            .field("currency", &self.currency)
            .field("catalog", &self.catalog)
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}
