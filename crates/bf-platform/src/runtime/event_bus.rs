use bf_core::StartupEvent;
use tokio::sync::mpsc;

use super::StartupHandle;

pub type StartupEventSender = mpsc::UnboundedSender<StartupEvent>;
pub type WeakStartupEventSender = mpsc::WeakUnboundedSender<StartupEvent>;
pub type StartupEventReceiver = mpsc::UnboundedReceiver<StartupEvent>;

/// Create the orchestrator mailbox.
///
/// The receiver goes to [`super::StartupRuntime`]. The host keeps the
/// returned handle for lifecycle events; producers owned by the orchestrator
/// (timer, native callbacks, prompt adapters) get a [`super::WeakStartupHandle`]
/// so the mailbox closes once the host lets go of every strong handle.
pub fn startup_channel() -> (StartupHandle, StartupEventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (StartupHandle::new(tx), rx)
}
