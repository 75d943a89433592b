mod types;

pub use types::{Config, ServiceConfig};

use crate::error::{CrudinatorError, Result};
use std::fs;

/// Load configuration from a TOML file
pub fn load_config(path: &str) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CrudinatorError::Config(format!("Failed to read config file '{}': {}", path, e)))?;

    let config: Config = toml::from_str(&contents)?;

    config.validate().map_err(CrudinatorError::Config)?;

    tracing::info!("Loaded {} service(s) from {}", config.service.len(), path);

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    // Validate before saving
    config.validate().map_err(CrudinatorError::Config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)
        .map_err(|e| CrudinatorError::Config(format!("Failed to write config file '{}': {}", path, e)))?;

    tracing::info!("Wrote {} service(s) to {}", config.service.len(), path);

    Ok(())
}
