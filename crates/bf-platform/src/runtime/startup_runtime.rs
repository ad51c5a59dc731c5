use bf_app::{StartupError, StartupOrchestrator};
use bf_core::{StartupEvent, StartupOutcome};
use tracing::{debug, info, info_span, warn, Instrument};

use super::event_bus::StartupEventReceiver;

/// Single task that owns the orchestrator and drains its mailbox.
///
/// Every state change happens here, so the orchestrator needs no locking.
pub struct StartupRuntime {
    orchestrator: StartupOrchestrator,
    mailbox: StartupEventReceiver,
}

impl StartupRuntime {
    pub fn new(orchestrator: StartupOrchestrator, mailbox: StartupEventReceiver) -> Self {
        Self {
            orchestrator,
            mailbox,
        }
    }

    /// Run until startup ends and report how it ended.
    pub async fn run(mut self) -> Result<StartupOutcome, StartupError> {
        let span = info_span!(
            "platform.startup_runtime",
            session = %self.orchestrator.session_id()
        );
        async move {
            info!("startup runtime started");
            loop {
                if let Some(outcome) = self.orchestrator.outcome() {
                    info!(outcome = ?outcome, "startup runtime finished");
                    return Ok(outcome.clone());
                }

                let Some(event) = self.mailbox.recv().await else {
                    warn!("startup mailbox closed, tearing down");
                    self.orchestrator.dispatch(StartupEvent::Destroyed).await?;
                    continue;
                };

                debug!(event = ?event, "startup runtime received event");
                self.orchestrator.dispatch(event).await?;
            }
        }
        .instrument(span)
        .await
    }
}
