use async_trait::async_trait;

use crate::navigation::{DelegatedResult, ScreenLaunch};

#[async_trait]
pub trait NavigatorPort: Send + Sync {
    /// Start a screen without waiting for it.
    async fn start(&self, launch: ScreenLaunch) -> anyhow::Result<()>;

    /// Start a screen whose result is delivered later as a delegated-result event.
    async fn start_for_result(&self, launch: ScreenLaunch) -> anyhow::Result<()>;

    /// Close the startup screen.
    async fn finish(&self) -> anyhow::Result<()>;

    /// Close the startup screen, handing `result` to whoever launched it.
    async fn finish_with_result(&self, result: DelegatedResult) -> anyhow::Result<()>;
}
