use std::sync::Arc;

use bf_core::{ports::InitTimerPort, InitTicket, StartupEvent};
use tokio::sync::{mpsc, Mutex};
use tokio::time::{sleep, Duration};
use tracing::{debug, warn};

type ArmedTimer = (InitTicket, tokio::task::AbortHandle);

/// Init delay timer backed by a tokio task.
///
/// When the delay elapses, an init-delay-elapsed event is pushed into the
/// orchestrator's mailbox. The timer only holds a weak sender, so it never
/// keeps the mailbox open on its own.
pub struct TokioInitTimer {
    armed: Arc<Mutex<Option<ArmedTimer>>>,
    events: mpsc::WeakUnboundedSender<StartupEvent>,
}

impl TokioInitTimer {
    pub fn new(events: mpsc::WeakUnboundedSender<StartupEvent>) -> Self {
        Self {
            armed: Arc::new(Mutex::new(None)),
            events,
        }
    }

    /// Ticket of the armed timer, if any.
    pub async fn armed_ticket(&self) -> Option<InitTicket> {
        self.armed.lock().await.as_ref().map(|(ticket, _)| *ticket)
    }
}

#[async_trait::async_trait]
impl InitTimerPort for TokioInitTimer {
    async fn start(&mut self, ticket: InitTicket, delay: Duration) -> anyhow::Result<()> {
        let armed = Arc::clone(&self.armed);
        let events = self.events.clone();

        let mut armed_guard = self.armed.lock().await;
        if let Some((previous, existing)) = armed_guard.take() {
            existing.abort();
            debug!(%previous, "init timer replaced");
        }

        let handle = tokio::spawn(async move {
            sleep(delay).await;
            let mut armed_guard = armed.lock().await;
            if matches!(armed_guard.as_ref(), Some((armed_ticket, _)) if *armed_ticket == ticket) {
                armed_guard.take();
            }
            drop(armed_guard);
            let delivered = events
                .upgrade()
                .is_some_and(|tx| tx.send(StartupEvent::InitDelayElapsed { ticket }).is_ok());
            if !delivered {
                warn!(%ticket, "init timer fired after mailbox closed");
            }
        });

        *armed_guard = Some((ticket, handle.abort_handle()));
        debug!(%ticket, delay_ms = delay.as_millis() as u64, "init timer started");
        Ok(())
    }

    async fn stop(&mut self) -> anyhow::Result<()> {
        let mut armed_guard = self.armed.lock().await;
        if let Some((ticket, handle)) = armed_guard.take() {
            handle.abort();
            debug!(%ticket, "init timer stopped");
        }
        Ok(())
    }
}
