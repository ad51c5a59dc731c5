//! Startup flags port
//!
//! This port defines the contract for the flags that must survive process
//! restarts. Implementations are provided by the infrastructure layer
//! (e.g., file-based storage). Every write is idempotent.

use async_trait::async_trait;

#[async_trait]
pub trait StartupFlagsPort: Send + Sync {
    /// Whether the location prompt has been shown before.
    async fn is_location_requested(&self) -> anyhow::Result<bool>;

    /// Record that the location prompt has been shown. Never cleared.
    async fn set_location_requested(&self) -> anyhow::Result<()>;

    /// Whether this process start is the first one ever recorded.
    async fn is_first_launch(&self) -> anyhow::Result<bool>;

    /// Record that the first-run dialog has been seen.
    async fn mark_first_run_dialog_seen(&self) -> anyhow::Result<()>;

    /// Count a process start. Called by the host before the orchestrator exists.
    async fn register_launch(&self) -> anyhow::Result<u64>;
}
