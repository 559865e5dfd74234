//! Configuration loading
//!
//! Reads an optional TOML config file from the platform config directory
//! (or an explicit path). A missing file is not an error; every field has a
//! default. The API key can also arrive via the `GOOGLE_PLACES_API_KEY`
//! environment variable or the CLI, which take precedence over the file.

mod types;

use std::path::{Path, PathBuf};

pub use types::{ApiConfig, Config, WidgetConfig};

use crate::error::GeocompleteError;

/// Environment variable consulted for the API key
pub const API_KEY_ENV_VAR: &str = "GOOGLE_PLACES_API_KEY";

/// Default config file location under the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("geocomplete").join("config.toml"))
}

/// Load configuration from the given path, or the default location
///
/// A missing file yields the default configuration. A file that exists but
/// fails to parse is an error; silently ignoring it would mask typos.
pub fn load(path: Option<&Path>) -> Result<Config, GeocompleteError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    toml::from_str(&contents).map_err(|e| {
        GeocompleteError::InvalidConfig(format!("{}: {}", path.display(), e))
    })
}

/// Resolve the API key from CLI flag, environment, then config file
pub fn resolve_api_key(cli_key: Option<String>, config: &Config) -> Option<String> {
    cli_key
        .or_else(|| std::env::var(API_KEY_ENV_VAR).ok())
        .or_else(|| config.api.key.clone())
        .filter(|key| !key.is_empty())
}
