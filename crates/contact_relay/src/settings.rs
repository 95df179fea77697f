use std::{collections::HashMap, net::SocketAddr, path::Path};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "contact_relay";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_addr: String,
    /// Cap on the whole request body, enforced before JSON decoding.
    pub max_body_bytes: usize,
    pub max_field_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8787".into(),
            max_body_bytes: 64 * 1024,
            max_field_bytes: 8 * 1024,
        }
    }
}

impl Settings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.bind_addr))
    }
}

/// Defaults, then `contact_relay.toml` in the working directory if present,
/// then `APP__*` environment variables.
pub fn load_settings() -> anyhow::Result<Settings> {
    build_settings(None, None)
}

pub(crate) fn build_settings(
    file: Option<&Path>,
    env_overrides: Option<HashMap<String, String>>,
) -> anyhow::Result<Settings> {
    let defaults = Settings::default();
    let file_source = match file {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let config = Config::builder()
        .set_default("bind_addr", defaults.bind_addr)?
        .set_default("max_body_bytes", defaults.max_body_bytes as u64)?
        .set_default("max_field_bytes", defaults.max_field_bytes as u64)?
        .add_source(file_source)
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env_overrides),
        )
        .build()
        .context("failed to assemble contact relay settings")?;

    let settings: Settings = config
        .try_deserialize()
        .context("failed to deserialize contact relay settings")?;
    if settings.max_field_bytes > settings.max_body_bytes {
        anyhow::bail!(
            "max_field_bytes ({}) cannot exceed max_body_bytes ({})",
            settings.max_field_bytes,
            settings.max_body_bytes
        );
    }
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
