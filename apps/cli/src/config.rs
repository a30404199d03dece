use std::{
    fs,
    path::Path,
    time::Duration,
};

use anyhow::Context;
use client_core::GatewayOptions;
use serde::Deserialize;
use shared::protocol::DEFAULT_SERVER_URL;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "booking.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server_url: String,
    /// Unset means requests wait as long as the service takes.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            request_timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn gateway_options(&self) -> anyhow::Result<GatewayOptions> {
        let base_url = Url::parse(self.server_url.trim())
            .with_context(|| format!("invalid server url '{}'", self.server_url))?;
        Ok(GatewayOptions {
            base_url,
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        })
    }
}

/// Defaults, then the config file, then the environment.
///
/// An explicitly named file must exist; the default `booking.toml` is optional.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let settings = settings_from_file(config_path, Path::new(DEFAULT_CONFIG_FILE))?;
    Ok(apply_env(settings, |key| std::env::var(key).ok()))
}

fn settings_from_file(config_path: Option<&Path>, default_path: &Path) -> anyhow::Result<Settings> {
    match config_path {
        Some(path) => read_settings_file(path),
        None if default_path.exists() => read_settings_file(default_path),
        None => Ok(Settings::default()),
    }
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse config file '{}'", path.display()))
}

pub fn apply_env(mut settings: Settings, var: impl Fn(&str) -> Option<String>) -> Settings {
    if let Some(v) = var("BOOKING_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = var("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = Some(parsed);
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
