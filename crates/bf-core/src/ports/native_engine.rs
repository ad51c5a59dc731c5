use std::sync::Arc;

use async_trait::async_trait;

use crate::startup::{InitOutcome, StorageInitError};

/// Callback the native layer uses once its asynchronous continuation is done.
///
/// May be invoked from any thread; implementations marshal the call onto the
/// orchestrator's own task.
pub trait InitContinuationPort: Send + Sync {
    fn init_completed(&self);
}

#[async_trait]
pub trait NativeEnginePort: Send + Sync {
    /// Initialize the engine.
    ///
    /// When the returned outcome has `async_continue` set, the engine keeps working
    /// and calls `continuation.init_completed()` exactly once when it is done.
    async fn init(
        &self,
        continuation: Arc<dyn InitContinuationPort>,
    ) -> Result<InitOutcome, StorageInitError>;
}
