//! Status enums reported by cart operations.

use serde::{Deserialize, Serialize};

/// Result of asking the engine to add a catalog entry to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddStatus {
    /// A new line was appended.
    Success,
    /// The entry is already in the cart; nothing changed.
    Duplicate,
    /// No catalog entry has the requested id; nothing changed.
    NotFound,
}

impl AddStatus {
    /// Whether the cart was modified.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for AddStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Duplicate => write!(f, "duplicate"),
            Self::NotFound => write!(f, "not_found"),
        }
    }
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStatus {
    /// The cart total was positive and the order was placed.
    Success,
    /// The cart total was zero.
    ValidationFailure,
}

impl CheckoutStatus {
    /// Whether the order was placed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for CheckoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::ValidationFailure => write!(f, "validation_failure"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_add_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&AddStatus::NotFound).unwrap(),
            "\"not_found\""
        );
        assert_eq!(AddStatus::NotFound.to_string(), "not_found");
    }

    #[test]
    fn test_checkout_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&CheckoutStatus::ValidationFailure).unwrap(),
            "\"validation_failure\""
        );
        let parsed: CheckoutStatus = serde_json::from_str("\"success\"").unwrap();
        assert!(parsed.is_success());
    }

    #[test]
    fn test_only_success_modifies() {
        assert!(AddStatus::Success.is_success());
        assert!(!AddStatus::Duplicate.is_success());
        assert!(!AddStatus::NotFound.is_success());
    }
}
