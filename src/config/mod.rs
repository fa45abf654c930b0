mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH`, or `config.yaml` when unset.
///
/// A missing default file means "all defaults"; a missing file named through
/// `CONFIG_PATH` is an error. `MODEL_ENDPOINT` overrides `model.endpoint`.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from(DEFAULT_CONFIG_PATH).await?,
        Err(_) => {
            debug!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
            Config::default()
        }
    };

    if let Ok(endpoint) = env::var("MODEL_ENDPOINT") {
        debug!("Model endpoint overridden from environment: {}", endpoint);
        config.model.endpoint = endpoint;
    }

    Ok(config)
}

pub async fn load_from(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // serde_yaml maps an empty document to unit, not to an empty mapping
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(config_str)?;

    if config.model.endpoint.trim().is_empty() {
        return Err(Error::config("model.endpoint must not be empty"));
    }

    Ok(config)
}
