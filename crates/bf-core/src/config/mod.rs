//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML -> DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation (missing keys are recorded as empty facts)

use std::path::PathBuf;

/// Startup configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Delay between resume and native init, in milliseconds.
    /// `None` means the key was absent; the orchestrator falls back to its default.
    pub init_delay_ms: Option<u64>,

    /// Stored UI theme identifier (may be empty - this is a fact, not an error)
    pub theme: String,

    /// Directory handed to the native engine for its resources
    pub data_dir: PathBuf,
}

impl StartupConfig {
    /// Create StartupConfig from TOML value
    ///
    /// This method must NOT contain any validation or default value logic.
    /// Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            init_delay_ms: toml_value
                .get("startup")
                .and_then(|s| s.get("init_delay_ms"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64),
            theme: toml_value
                .get("ui")
                .and_then(|u| u.get("theme"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            data_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty StartupConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            init_delay_ms: None,
            theme: String::new(),
            data_dir: PathBuf::new(),
        }
    }

    /// Create StartupConfig with system-default paths for production use
    ///
    /// The base directory should be computed by the caller using platform-specific
    /// logic (e.g., `dirs` crate).
    pub fn with_system_defaults(app_data_root: PathBuf) -> Self {
        Self {
            init_delay_ms: None,
            theme: String::new(),
            data_dir: app_data_root.join("resources"),
        }
    }
}
