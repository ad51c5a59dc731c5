use async_trait::async_trait;

#[async_trait]
pub trait LocationServicePort: Send + Sync {
    fn is_active(&self) -> bool;

    /// Start continuous location tracking.
    async fn start(&self) -> anyhow::Result<()>;

    /// Tell the service the app is in its first run (it may pick a first fix strategy).
    fn on_entered_first_run(&self);
}
