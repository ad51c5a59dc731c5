use crate::ids::InitTicket;
use crate::navigation::DelegatedResult;
use crate::permission::PermissionSnapshot;
use crate::startup::StorageInitError;

/// Successful native init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOutcome {
    /// The engine continues on its own and will report completion later.
    pub async_continue: bool,
}

/// Events that drive the startup flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupEvent {
    /// UI came to the foreground.
    Resumed { permissions: PermissionSnapshot },
    /// UI left the foreground.
    Paused,
    /// The location prompt was answered; the grants do not gate progress.
    PermissionResult { grants: PermissionSnapshot },
    /// A scheduled init task fired.
    InitDelayElapsed { ticket: InitTicket },
    /// Native init returned (from orchestrator).
    InitSucceeded { outcome: InitOutcome },
    /// Native init failed on storage (from orchestrator).
    InitFailed { error: StorageInitError },
    /// Native layer finished its asynchronous continuation.
    InitCompleted,
    /// A screen started in result-awaiting mode returned.
    DelegatedResultReceived { result: DelegatedResult },
    /// The fatal dialog's only button was pressed.
    FatalDialogAcknowledged,
    /// UI torn down.
    Destroyed,
}
