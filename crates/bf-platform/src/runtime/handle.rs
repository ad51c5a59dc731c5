use bf_core::ports::InitContinuationPort;
use bf_core::{DelegatedResult, PermissionSnapshot, StartupEvent};
use tracing::warn;

use super::event_bus::{StartupEventSender, WeakStartupEventSender};

/// Cloneable entry point into the orchestrator mailbox.
///
/// Safe to use from any thread; events are handled in send order by the
/// runtime task.
#[derive(Debug, Clone)]
pub struct StartupHandle {
    tx: StartupEventSender,
}

impl StartupHandle {
    pub(crate) fn new(tx: StartupEventSender) -> Self {
        Self { tx }
    }

    /// Weak raw sender, for adapters that emit their own events (the init timer).
    pub fn weak_sender(&self) -> WeakStartupEventSender {
        self.tx.downgrade()
    }

    /// Handle for producers the orchestrator owns.
    pub fn downgrade(&self) -> WeakStartupHandle {
        WeakStartupHandle {
            tx: self.tx.downgrade(),
        }
    }

    pub fn send(&self, event: StartupEvent) -> bool {
        match self.tx.send(event) {
            Ok(()) => true,
            Err(err) => {
                warn!(event = ?err.0, "startup mailbox closed, event dropped");
                false
            }
        }
    }

    pub fn resume(&self, permissions: PermissionSnapshot) -> bool {
        self.send(StartupEvent::Resumed { permissions })
    }

    pub fn pause(&self) -> bool {
        self.send(StartupEvent::Paused)
    }

    pub fn permission_result(&self, grants: PermissionSnapshot) -> bool {
        self.send(StartupEvent::PermissionResult { grants })
    }

    pub fn delegated_result(&self, result: DelegatedResult) -> bool {
        self.send(StartupEvent::DelegatedResultReceived { result })
    }

    pub fn acknowledge_fatal(&self) -> bool {
        self.send(StartupEvent::FatalDialogAcknowledged)
    }

    pub fn destroy(&self) -> bool {
        self.send(StartupEvent::Destroyed)
    }
}

/// Non-owning handle; sends only while some [`StartupHandle`] is alive.
#[derive(Debug, Clone)]
pub struct WeakStartupHandle {
    tx: WeakStartupEventSender,
}

impl WeakStartupHandle {
    pub fn upgrade(&self) -> Option<StartupHandle> {
        self.tx.upgrade().map(StartupHandle::new)
    }

    pub fn send(&self, event: StartupEvent) -> bool {
        match self.upgrade() {
            Some(handle) => handle.send(event),
            None => {
                warn!(event = ?event, "startup mailbox closed, event dropped");
                false
            }
        }
    }
}

impl InitContinuationPort for WeakStartupHandle {
    fn init_completed(&self) {
        self.send(StartupEvent::InitCompleted);
    }
}
