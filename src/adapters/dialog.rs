use async_trait::async_trait;
use bf_core::ports::DialogPort;
use bf_core::{FatalDialog, StartupEvent};
use bf_platform::WeakStartupHandle;
use tracing::error;

/// Logs the fatal dialog and presses its only button.
pub struct LoggingDialog {
    handle: WeakStartupHandle,
}

impl LoggingDialog {
    pub fn new(handle: WeakStartupHandle) -> Self {
        Self { handle }
    }
}

#[async_trait]
impl DialogPort for LoggingDialog {
    async fn show_fatal(&self, dialog: FatalDialog) -> anyhow::Result<()> {
        error!(
            title = %dialog.title,
            message = %dialog.message,
            cancelable = dialog.cancelable,
            "fatal dialog shown"
        );
        self.handle.send(StartupEvent::FatalDialogAcknowledged);
        Ok(())
    }
}
