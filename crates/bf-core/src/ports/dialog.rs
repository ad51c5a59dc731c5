use async_trait::async_trait;

use crate::startup::FatalDialog;

#[async_trait]
pub trait DialogPort: Send + Sync {
    /// Present a blocking error dialog. Its only button produces a
    /// fatal-dialog-acknowledged event.
    async fn show_fatal(&self, dialog: FatalDialog) -> anyhow::Result<()>;
}
