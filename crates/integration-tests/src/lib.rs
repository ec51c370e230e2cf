//! Shared helpers for Feira integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;
use std::path::Path;

use feira_store::Config;

/// Build a store configuration rooted in a scratch directory.
#[must_use]
pub fn test_config(dir: &Path) -> Config {
    Config::with_data_dir(dir)
}

/// Write seed JSON to the configured seed path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_seed(config: &Config, json: &str) -> io::Result<()> {
    if let Some(parent) = config.seed_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&config.seed_path, json)
}
