//! Core types for the cart engine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod status;

pub use id::*;
pub use price::{CurrencyCode, DISPLAY_SCALE, Price, format_amount};
pub use status::*;
