//! # Configuration Loader
//!
//! Reads the TOML file and maps it to pure DTOs. Missing keys stay empty or
//! `None`; defaults are applied later by [`HostSettings::resolve`] and
//! [`StartupConfig::with_system_defaults`]. No validation happens here.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bf_core::StartupConfig;

/// Everything read from the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootflowConfig {
    pub startup: StartupConfig,
    pub host: HostConfig,
}

impl BootflowConfig {
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            startup: StartupConfig::from_toml(toml_value)?,
            host: HostConfig::from_toml(toml_value),
        })
    }

    /// Configuration used when no file is given.
    pub fn with_system_defaults(app_data_root: PathBuf) -> Self {
        Self {
            startup: StartupConfig::with_system_defaults(app_data_root),
            host: HostConfig::default(),
        }
    }
}

/// `[host]` section: the simulated environment the headless host plays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    /// Location already granted before startup.
    pub location_granted: Option<bool>,
    /// Answer given when the location prompt is shown.
    pub grant_on_prompt: Option<bool>,
    /// Launch came from the launcher icon.
    pub from_launcher: Option<bool>,
    /// Screen requested through the launch request override.
    pub activity: Option<String>,
    /// Engine finishes init through an async continuation.
    pub async_init: Option<bool>,
    pub continuation_delay_ms: Option<u64>,
    /// Result code returned by a delegated screen.
    pub delegated_result_code: Option<i64>,
}

impl HostConfig {
    pub fn from_toml(toml_value: &toml::Value) -> Self {
        let host = toml_value.get("host");
        let boolean = |key: &str| host.and_then(|h| h.get(key)).and_then(|v| v.as_bool());
        let integer = |key: &str| host.and_then(|h| h.get(key)).and_then(|v| v.as_integer());

        Self {
            location_granted: boolean("location_granted"),
            grant_on_prompt: boolean("grant_on_prompt"),
            from_launcher: boolean("from_launcher"),
            activity: host
                .and_then(|h| h.get("activity"))
                .and_then(|v| v.as_str())
                .map(str::to_string),
            async_init: boolean("async_init"),
            continuation_delay_ms: integer("continuation_delay_ms").map(|v| v.max(0) as u64),
            delegated_result_code: integer("delegated_result_code"),
        }
    }
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<BootflowConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    BootflowConfig::from_toml(&toml_value)
}
