//! Persisted startup flags.

use serde::{Deserialize, Serialize};

/// Flags that survive process restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupFlags {
    /// The location prompt has been shown at least once.
    #[serde(default)]
    pub location_requested: bool,
    /// Number of process starts recorded so far.
    #[serde(default)]
    pub launch_count: u64,
    /// The first-run dialog was seen (set on launcher-originated navigation).
    #[serde(default)]
    pub first_run_dialog_seen: bool,
    /// Unix time (ms) of the first recorded launch.
    #[serde(default)]
    pub first_launch_at_ms: Option<i64>,
}

impl StartupFlags {
    /// True while the very first process start is running.
    pub fn is_first_launch(&self) -> bool {
        self.launch_count <= 1
    }
}
