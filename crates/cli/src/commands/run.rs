//! Replay a sequence of cart actions.
//!
//! Each action maps to one user interaction on the product page (picking an
//! entry, pressing `+`/`-`, typing a quantity, pressing Checkout). Actions
//! run in order against a fresh engine and notifications are forwarded to
//! the log as they happen.

use std::str::FromStr;

use cart_engine_core::{
    AddOutcome, Cart, CartEngine, CatalogId, CheckoutOutcome, CurrencyCode, EngineConfig,
    InitMode, Notification, Notifier, RecordingNotifier, TracingNotifier,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::error::CliError;
use crate::render;

/// One user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `add:<id>`
    Add(CatalogId),
    /// `set:<id>=<qty>`
    Set(CatalogId, i64),
    /// `inc:<id>`
    Increment(CatalogId),
    /// `dec:<id>`
    Decrement(CatalogId),
    /// `total`
    Total,
    /// `checkout`
    Checkout,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "total" => return Ok(Self::Total),
            "checkout" => return Ok(Self::Checkout),
            _ => {}
        }

        let (verb, arg) = s
            .split_once(':')
            .ok_or_else(|| format!("invalid action: {s}"))?;
        let parse_id =
            |raw: &str| CatalogId::from_str(raw).map_err(|e| format!("invalid id in {s}: {e}"));

        match verb.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add(parse_id(arg)?)),
            "inc" => Ok(Self::Increment(parse_id(arg)?)),
            "dec" => Ok(Self::Decrement(parse_id(arg)?)),
            "set" => {
                let (id, quantity) = arg
                    .split_once('=')
                    .ok_or_else(|| format!("expected set:<id>=<qty>, got {s}"))?;
                let quantity = quantity
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| format!("invalid quantity in {s}: {e}"))?;
                Ok(Self::Set(parse_id(id)?, quantity))
            }
            _ => Err(format!("unknown action: {verb}")),
        }
    }
}

/// What a replay produced.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub mode: InitMode,
    pub currency: CurrencyCode,
    pub cart: Cart,
    pub total: Decimal,
    pub adds: Vec<AddOutcome>,
    pub checkouts: Vec<CheckoutOutcome>,
    pub notifications: Vec<Notification>,
}

/// Run `actions` in order against a fresh engine built from `config`.
pub fn replay(config: EngineConfig, actions: &[Action]) -> RunReport {
    let recorder = RecordingNotifier::default();
    let mut engine = CartEngine::from_config(config, recorder.clone());

    let mut adds = Vec::new();
    let mut checkouts = Vec::new();
    let mut notifications = Vec::new();

    for action in actions {
        match *action {
            Action::Add(id) => adds.push(engine.add_item(id)),
            Action::Set(id, quantity) => {
                engine.update_quantity(id, quantity);
            }
            Action::Increment(id) => {
                engine.increment(id);
            }
            Action::Decrement(id) => {
                engine.decrement(id);
            }
            Action::Total => info!(total = %engine.formatted_total(), "Cart total"),
            Action::Checkout => checkouts.push(engine.checkout()),
        }

        for notification in recorder.drain() {
            TracingNotifier.notify(notification.clone());
            notifications.push(notification);
        }
    }

    RunReport {
        mode: engine.mode(),
        currency: engine.currency(),
        cart: engine.cart().clone(),
        total: engine.compute_total(),
        adds,
        checkouts,
        notifications,
    }
}

/// Log the final cart as a table.
pub fn log_report(report: &RunReport) {
    info!(mode = %report.mode, lines = report.cart.len(), "Cart");
    for row in render::cart_table(&report.cart, report.currency) {
        info!("{row}");
    }
}

/// Write the report to stdout as pretty JSON.
///
/// # Errors
///
/// Returns `CliError::Json` if serialization fails.
#[allow(clippy::print_stdout)]
pub fn print_json(report: &RunReport) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
