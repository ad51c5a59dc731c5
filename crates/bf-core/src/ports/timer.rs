use std::time::Duration;

use crate::ids::InitTicket;

#[async_trait::async_trait]
pub trait InitTimerPort: Send {
    /// Arm the init timer. Any armed timer is stopped first; when `delay` elapses
    /// an init-delay-elapsed event carrying `ticket` is delivered.
    async fn start(&mut self, ticket: InitTicket, delay: Duration) -> anyhow::Result<()>;

    /// Disarm the timer. No-op when nothing is armed.
    async fn stop(&mut self) -> anyhow::Result<()>;
}
