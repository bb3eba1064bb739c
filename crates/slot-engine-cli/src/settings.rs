//! Layered loading of [`SlotConfig`] for the CLI.
//!
//! Sources, lowest precedence first: built-in defaults, an optional config file
//! (format picked from its extension), then `SLOTS__*` environment variables such as
//! `SLOTS__DEFAULT_SLOT_MINUTES=15` or `SLOTS__WORKING_HOURS__MONDAY__IS_OPEN=false`.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use slot_engine::SlotConfig;
use tracing::debug;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "SLOTS";

pub fn load(path: Option<&str>) -> Result<SlotConfig> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(File::with_name(path).required(true));
    }

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .with_context(|| match path {
            Some(path) => format!("Failed to load config: {}", path),
            None => "Failed to load config from environment".to_string(),
        })?;

    let config: SlotConfig = settings
        .try_deserialize()
        .context("Invalid slot configuration")?;
    config.validate()?;

    debug!(
        default_slot_minutes = config.default_slot_minutes,
        file = path.unwrap_or("<none>"),
        "loaded slot configuration"
    );

    Ok(config)
}
