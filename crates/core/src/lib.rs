//! Cart Engine Core - product selection cart library.
//!
//! This crate owns the only stateful logic behind the product selection page:
//! a static catalog, the cart built from it, and the checkout rule.
//!
//! # Architecture
//!
//! The core crate performs no rendering and no network I/O. A presentation
//! layer (see the `cart-cli` binary) drives a [`CartEngine`], renders the
//! [`Cart`] snapshots it hands back, and displays the [`Notification`]s it
//! emits through an injected [`Notifier`].
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, and outcome statuses
//! - [`catalog`] - The immutable list of purchasable entries
//! - [`cart`] - Cart lines and pure snapshot transitions
//! - [`engine`] - The stateful engine consumed by presentation layers
//! - [`notify`] - Toast-style notifications and notifier implementations
//! - [`config`] - Environment and file based configuration
//!
//! # Example
//!
//! ```
//! use cart_engine_core::{Catalog, CartEngine, CatalogId, InitMode, RecordingNotifier};
//!
//! let notifier = RecordingNotifier::default();
//! let mut engine = CartEngine::new(Catalog::demo(), InitMode::Empty, notifier.clone());
//!
//! engine.add_item(CatalogId::new(1));
//! engine.update_quantity(CatalogId::new(1), 3);
//!
//! assert_eq!(engine.compute_total().to_string(), "299.97");
//! assert!(engine.checkout().message.contains("299.97"));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod notify;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use config::{ConfigError, ConfigOverrides, EngineConfig, InitMode};
pub use engine::{AddOutcome, CartEngine, CheckoutOutcome};
pub use notify::{
    NoopNotifier, Notification, NotificationVariant, Notifier, RecordingNotifier,
    TracingNotifier,
};
pub use types::*;
