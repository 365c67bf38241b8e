//! Session configuration files.
//!
//! Fields left out of the file take their default values. A config read from
//! disk goes through the same validation as one built in code.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::SessionConfig;
use crate::json::{read_json, write_json};

/// Load a config file, falling back to [`SessionConfig::default`] when the
/// file does not exist.
pub fn load_config(path: impl AsRef<Path>) -> Result<SessionConfig> {
    let path = path.as_ref();
    let Some(config) = read_json::<SessionConfig>(path).context("failed to load config")? else {
        tracing::info!("no config at {}, using defaults", path.display());
        return Ok(SessionConfig::default());
    };

    config
        .validate()
        .with_context(|| format!("invalid config in {}", path.display()))?;

    tracing::info!(
        height = config.height(),
        width = config.width(),
        goal = config.goal(),
        "loaded config from {}",
        path.display()
    );
    Ok(config)
}

pub fn save_config(path: impl AsRef<Path>, config: &SessionConfig) -> Result<()> {
    write_json(path.as_ref(), config).context("failed to save config")
}
