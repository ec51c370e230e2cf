//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FEIRA_DATA_DIR` - Directory holding the persisted collections (default: `.feira`)
//! - `FEIRA_SEED_PATH` - Path of the seed JSON file (default: `<data_dir>/lista-compras.json`)

use std::path::PathBuf;

use thiserror::Error;

/// File name of the shopping-list collection.
///
/// Matches the web version's local-storage key so a dump of that storage
/// drops straight into the data directory.
pub const ITEMS_FILE: &str = "shopping-list-items-v1.json";

/// File name of the cart collection.
pub const CART_FILE: &str = "mini-store-cart-v1.json";

/// Default seed file name, as the web version serves it next to the list page.
pub const DEFAULT_SEED_FILE: &str = "lista-compras.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Store configuration: where collections and the seed file live.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted collections.
    pub data_dir: PathBuf,
    /// Seed JSON file merged once into the item store on load.
    pub seed_path: PathBuf,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = match std::env::var("FEIRA_DATA_DIR") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "FEIRA_DATA_DIR",
                    "must not be empty".to_string(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from(".feira"),
        };

        let seed_path = match std::env::var("FEIRA_SEED_PATH") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "FEIRA_SEED_PATH",
                    "must not be empty".to_string(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => data_dir.join(DEFAULT_SEED_FILE),
        };

        Ok(Self {
            data_dir,
            seed_path,
        })
    }

    /// Build a configuration rooted at an explicit data directory.
    #[must_use]
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        let data_dir = dir.into();
        let seed_path = data_dir.join(DEFAULT_SEED_FILE);
        Self {
            data_dir,
            seed_path,
        }
    }

    /// Path of the shopping-list collection.
    #[must_use]
    pub fn items_path(&self) -> PathBuf {
        self.data_dir.join(ITEMS_FILE)
    }

    /// Path of the cart collection.
    #[must_use]
    pub fn cart_path(&self) -> PathBuf {
        self.data_dir.join(CART_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_data_dir() {
        let config = Config::with_data_dir("/tmp/feira-data");
        assert_eq!(
            config.items_path(),
            PathBuf::from("/tmp/feira-data/shopping-list-items-v1.json")
        );
        assert_eq!(
            config.cart_path(),
            PathBuf::from("/tmp/feira-data/mini-store-cart-v1.json")
        );
        assert_eq!(
            config.seed_path,
            PathBuf::from("/tmp/feira-data/lista-compras.json")
        );
    }
}
