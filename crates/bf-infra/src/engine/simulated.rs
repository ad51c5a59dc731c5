//! Stand-in for the native engine used by the headless host.
//!
//! Init prepares the data directory and proves it is writable. Any I/O failure
//! there is reported as a storage init failure. When configured for async
//! continuation, the remaining work finishes on a plain OS thread which then
//! calls back through the continuation port, the same way a native layer would.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bf_core::ports::{InitContinuationPort, NativeEnginePort};
use bf_core::{InitOutcome, StorageInitError};
use tokio::fs;
use tracing::{debug, info};

pub const DEFAULT_CONTINUATION_DELAY: Duration = Duration::from_millis(50);

const WRITE_CHECK_FILE: &str = ".write_check";

pub struct SimulatedNativeEngine {
    data_dir: PathBuf,
    async_continue: bool,
    continuation_delay: Duration,
}

impl SimulatedNativeEngine {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            async_continue: false,
            continuation_delay: DEFAULT_CONTINUATION_DELAY,
        }
    }

    /// Finish init on a background thread instead of returning synchronously.
    pub fn with_async_continuation(mut self, delay: Duration) -> Self {
        self.async_continue = true;
        self.continuation_delay = delay;
        self
    }

    async fn prepare_storage(&self) -> Result<(), StorageInitError> {
        fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            StorageInitError::new(format!(
                "cannot create data dir {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        let marker = self.data_dir.join(WRITE_CHECK_FILE);
        fs::write(&marker, b"ok").await.map_err(|e| {
            StorageInitError::new(format!(
                "data dir {} is not writable: {}",
                self.data_dir.display(),
                e
            ))
        })?;
        fs::remove_file(&marker).await?;
        Ok(())
    }
}

#[async_trait]
impl NativeEnginePort for SimulatedNativeEngine {
    async fn init(
        &self,
        continuation: Arc<dyn InitContinuationPort>,
    ) -> Result<InitOutcome, StorageInitError> {
        self.prepare_storage().await?;
        info!(data_dir = %self.data_dir.display(), "engine storage ready");

        if self.async_continue {
            let delay = self.continuation_delay;
            std::thread::spawn(move || {
                std::thread::sleep(delay);
                debug!("engine continuation finished");
                continuation.init_completed();
            });
        }

        Ok(InitOutcome {
            async_continue: self.async_continue,
        })
    }
}
