//! File-based startup flags repository
//!
//! This module provides a file-based implementation of the StartupFlagsPort,
//! persisting the startup flags to a local JSON file in the application data directory.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bf_core::ports::{ClockPort, StartupFlagsPort};
use bf_core::StartupFlags;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use crate::time::SystemClock;

pub const DEFAULT_STARTUP_FLAGS_FILE: &str = ".startup_flags";

pub struct FileStartupFlagsRepository {
    flags_file_path: PathBuf,
    clock: Arc<dyn ClockPort>,
    // Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileStartupFlagsRepository {
    /// Create repository with custom file path
    pub fn new(flags_file_path: PathBuf) -> Self {
        Self {
            flags_file_path,
            clock: Arc::new(SystemClock),
            write_lock: Mutex::new(()),
        }
    }

    /// Create repository with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self::new(base_dir.join(filename.into()))
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_STARTUP_FLAGS_FILE))
    }

    pub fn with_clock(mut self, clock: Arc<dyn ClockPort>) -> Self {
        self.clock = clock;
        self
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.flags_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Read the stored flags; a missing or empty file reads as a fresh install.
    pub async fn load(&self) -> anyhow::Result<StartupFlags> {
        if !self.flags_file_path.exists() {
            return Ok(StartupFlags::default());
        }

        let content = fs::read_to_string(&self.flags_file_path).await?;

        if content.trim().is_empty() {
            return Ok(StartupFlags::default());
        }

        let flags: StartupFlags = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse startup flags: {}", e))?;

        Ok(flags)
    }

    async fn store(&self, flags: &StartupFlags) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(flags)
            .map_err(|e| anyhow::anyhow!("Failed to serialize startup flags: {}", e))?;

        let mut file = fs::File::create(&self.flags_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create flags file: {}", e))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write flags file: {}", e))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync flags file: {}", e))?;

        Ok(())
    }

    /// Apply `change` to the stored flags. Nothing is written when it reports no change.
    async fn update<F>(&self, change: F) -> anyhow::Result<StartupFlags>
    where
        F: FnOnce(&mut StartupFlags) -> bool + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut flags = self.load().await?;
        if change(&mut flags) {
            self.store(&flags).await?;
        }
        Ok(flags)
    }
}

#[async_trait]
impl StartupFlagsPort for FileStartupFlagsRepository {
    async fn is_location_requested(&self) -> anyhow::Result<bool> {
        Ok(self.load().await?.location_requested)
    }

    async fn set_location_requested(&self) -> anyhow::Result<()> {
        self.update(|flags| !std::mem::replace(&mut flags.location_requested, true))
            .await?;
        Ok(())
    }

    async fn is_first_launch(&self) -> anyhow::Result<bool> {
        Ok(self.load().await?.is_first_launch())
    }

    async fn mark_first_run_dialog_seen(&self) -> anyhow::Result<()> {
        self.update(|flags| !std::mem::replace(&mut flags.first_run_dialog_seen, true))
            .await?;
        Ok(())
    }

    async fn register_launch(&self) -> anyhow::Result<u64> {
        let now_ms = self.clock.now_ms();
        let flags = self
            .update(|flags| {
                flags.launch_count = flags.launch_count.saturating_add(1);
                flags.first_launch_at_ms.get_or_insert(now_ms);
                true
            })
            .await?;
        debug!(launch_count = flags.launch_count, "launch registered");
        Ok(flags.launch_count)
    }
}
