use crate::ids::InitTicket;
use crate::navigation::DelegatedResult;
use crate::permission::Permission;

/// Modal shown for unrecoverable startup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalDialog {
    pub title: String,
    pub message: String,
    /// Always false for fatal dialogs: only the exit button closes them.
    pub cancelable: bool,
}

impl FatalDialog {
    pub fn storage() -> Self {
        Self {
            title: "dialog_error_storage_title".to_string(),
            message: "dialog_error_storage_message".to_string(),
            cancelable: false,
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupAction {
    /// Show the OS prompt for the given permissions.
    RequestPermissions { permissions: Vec<Permission> },
    /// Persist that the location prompt has been shown.
    PersistLocationRequested,
    /// Schedule native init after the configured delay.
    ScheduleInit { ticket: InitTicket },
    /// Invalidate the pending init task.
    CancelScheduledInit,
    /// Invoke native init.
    RunNativeInit,
    /// Start location tracking on the first-ever launch when a grant exists.
    BootstrapFirstRunLocation,
    /// Consume the pending navigation and start the target screen.
    DispatchNavigation,
    /// Present a blocking error dialog.
    ShowFatalError { dialog: FatalDialog },
    /// Hand a delegated screen's result back to the original caller and finish.
    PropagateResult { result: DelegatedResult },
    /// Close the startup screen.
    Finish,
}
