mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

pub async fn load_from(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::config(format!("cannot read {}: {}", path, e)))?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
