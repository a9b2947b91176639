//! Engine configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_INIT_MODE` - `empty` (default) or `prepopulated`
//! - `CART_CATALOG_PATH` - YAML catalog file (default: built-in demo catalog)
//! - `CART_CURRENCY` - ISO 4217 code used for display (default: USD)
//!
//! # Catalog File Format
//!
//! ```yaml
//! - id: 1
//!   name: Premium Widget
//!   unit_price: "99.99"
//! - id: 2
//!   name: Basic Gadget
//!   unit_price: "49.99"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogEntry, CatalogError};
use crate::types::CurrencyCode;

pub const INIT_MODE_VAR: &str = "CART_INIT_MODE";
pub const CATALOG_PATH_VAR: &str = "CART_CATALOG_PATH";
pub const CURRENCY_VAR: &str = "CART_CURRENCY";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Failed to read catalog file {path}: {source}")]
    ReadCatalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog file {path}: {source}")]
    ParseCatalog {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid catalog in {path}: {source}")]
    InvalidCatalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// How the cart is seeded when the engine starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InitMode {
    /// Start with no lines; the user adds entries from the catalog.
    #[default]
    Empty,
    /// Start with every catalog entry present at quantity zero.
    Prepopulated,
}

impl std::fmt::Display for InitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Prepopulated => write!(f, "prepopulated"),
        }
    }
}

impl std::str::FromStr for InitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "prepopulated" => Ok(Self::Prepopulated),
            _ => Err(format!("invalid init mode: {s}")),
        }
    }
}

/// Values that take precedence over the environment.
///
/// A field that is set means the matching variable is never read, so a
/// malformed value there cannot fail the load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub init_mode: Option<InitMode>,
    pub catalog_path: Option<PathBuf>,
    pub currency: Option<CurrencyCode>,
}

/// Everything needed to build a [`crate::CartEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub init_mode: InitMode,
    pub catalog: Catalog,
    pub currency: CurrencyCode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            init_mode: InitMode::default(),
            catalog: Catalog::demo(),
            currency: CurrencyCode::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an unrecognized value or the
    /// catalog file cannot be read or parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(&ConfigOverrides::default())
    }

    /// Load configuration from environment variables, with `overrides`
    /// taking precedence.
    ///
    /// # Errors
    ///
    /// Same as [`EngineConfig::from_env`], for the variables not overridden.
    pub fn from_env_with(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup_with(|key| std::env::var(key).ok(), overrides)
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`EngineConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with(lookup, &ConfigOverrides::default())
    }

    /// Load configuration from a key lookup, consulting it only for the
    /// fields `overrides` leaves unset.
    ///
    /// # Errors
    ///
    /// Same as [`EngineConfig::from_env`], for the variables not overridden.
    pub fn from_lookup_with<F>(lookup: F, overrides: &ConfigOverrides) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let init_mode = match overrides.init_mode {
            Some(mode) => mode,
            None => lookup_parsed(&lookup, INIT_MODE_VAR)?.unwrap_or_default(),
        };

        let currency = match overrides.currency {
            Some(currency) => currency,
            None => lookup_parsed(&lookup, CURRENCY_VAR)?.unwrap_or_default(),
        };

        let catalog = match overrides.catalog_path.as_deref() {
            Some(path) => load_catalog(path)?,
            None => match lookup(CATALOG_PATH_VAR) {
                Some(path) => load_catalog(Path::new(&path))?,
                None => Catalog::demo(),
            },
        };

        tracing::debug!(%init_mode, %currency, entries = catalog.len(), "loaded engine config");

        Ok(Self {
            init_mode,
            catalog,
            currency,
        })
    }
}

fn lookup_parsed<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr<Err = String>,
{
    lookup(key)
        .map(|value| value.parse::<T>())
        .transpose()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e))
}

/// Read and validate a YAML catalog file.
///
/// # Errors
///
/// Returns `ConfigError::ReadCatalog` if the file can't be read,
/// `ConfigError::ParseCatalog` if it is not a list of entries, and
/// `ConfigError::InvalidCatalog` if the entries break catalog rules
/// (duplicate ids, negative prices).
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<CatalogEntry> =
        serde_yaml::from_str(&content).map_err(|source| ConfigError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    Catalog::new(entries).map_err(|source| ConfigError::InvalidCatalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a YAML catalog document.
///
/// # Errors
///
/// Returns the YAML error for malformed input or invalid entries.
pub fn parse_catalog(content: &str) -> Result<Catalog, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::types::CatalogId;
    use rust_decimal_macros::dec;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.catalog.len(), 3);
    }

    #[test]
    fn test_init_mode_from_lookup() {
        let config =
            EngineConfig::from_lookup(lookup_from(&[(INIT_MODE_VAR, "Prepopulated")])).unwrap();
        assert_eq!(config.init_mode, InitMode::Prepopulated);
    }

    #[test]
    fn test_invalid_init_mode() {
        let result = EngineConfig::from_lookup(lookup_from(&[(INIT_MODE_VAR, "full")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(ref key, _)) if key == INIT_MODE_VAR));
    }

    #[test]
    fn test_invalid_currency() {
        let result = EngineConfig::from_lookup(lookup_from(&[(CURRENCY_VAR, "DOGE")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_missing_catalog_file() {
        let result = EngineConfig::from_lookup(lookup_from(&[(
            CATALOG_PATH_VAR,
            "/nonexistent/catalog.yaml",
        )]));
        assert!(matches!(result, Err(ConfigError::ReadCatalog { .. })));
    }

    // =========================================================================
    // Overrides
    // =========================================================================

    #[test]
    fn test_overrides_skip_malformed_variables() {
        let overrides = ConfigOverrides {
            init_mode: Some(InitMode::Prepopulated),
            catalog_path: None,
            currency: Some(CurrencyCode::EUR),
        };
        let config = EngineConfig::from_lookup_with(
            lookup_from(&[(INIT_MODE_VAR, "full"), (CURRENCY_VAR, "DOGE")]),
            &overrides,
        )
        .unwrap();

        assert_eq!(config.init_mode, InitMode::Prepopulated);
        assert_eq!(config.currency, CurrencyCode::EUR);
    }

    #[test]
    fn test_override_catalog_path_skips_env_path() {
        let path = write_temp_catalog(
            r#"
- id: 5
  name: Mug
  unit_price: "8.00"
"#,
        );
        let overrides = ConfigOverrides {
            catalog_path: Some(path.clone()),
            ..ConfigOverrides::default()
        };
        let config = EngineConfig::from_lookup_with(
            lookup_from(&[(CATALOG_PATH_VAR, "/nonexistent/catalog.yaml")]),
            &overrides,
        );
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.catalog.len(), 1);
        assert!(config.catalog.contains(CatalogId::new(5)));
    }

    #[test]
    fn test_unset_override_still_reads_lookup() {
        let overrides = ConfigOverrides {
            currency: Some(CurrencyCode::GBP),
            ..ConfigOverrides::default()
        };
        let result =
            EngineConfig::from_lookup_with(lookup_from(&[(INIT_MODE_VAR, "full")]), &overrides);
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(ref key, _)) if key == INIT_MODE_VAR));
    }

    // =========================================================================
    // Catalog files
    // =========================================================================

    fn write_temp_catalog(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cart-catalog-{}.yaml", uuid::Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_catalog_malformed_yaml() {
        let path = write_temp_catalog("id: [unterminated");
        let result = load_catalog(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::ParseCatalog { .. })));
    }

    #[test]
    fn test_load_catalog_invalid_entries() {
        let path = write_temp_catalog(
            r#"
- id: 1
  name: A
  unit_price: "1.00"
- id: 2
  name: B
  unit_price: "-2.00"
"#,
        );
        let result = load_catalog(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidCatalog {
                source: CatalogError::NegativePrice { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_parse_catalog_yaml() {
        let yaml = r#"
- id: 10
  name: Desk Lamp
  unit_price: "24.50"
- id: 11
  name: Bulb
  unit_price: "3.25"
"#;
        let catalog = parse_catalog(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(CatalogId::new(10)).unwrap().unit_price,
            dec!(24.50)
        );
    }

    #[test]
    fn test_parse_catalog_rejects_duplicates() {
        let yaml = r#"
- id: 1
  name: A
  unit_price: "1.00"
- id: 1
  name: B
  unit_price: "2.00"
"#;
        assert!(parse_catalog(yaml).is_err());
    }

    #[test]
    fn test_init_mode_display_roundtrip() {
        for mode in [InitMode::Empty, InitMode::Prepopulated] {
            assert_eq!(mode.to_string().parse::<InitMode>().unwrap(), mode);
        }
    }
}
