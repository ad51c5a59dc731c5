use std::sync::Mutex;

use async_trait::async_trait;
use bf_core::ports::NavigatorPort;
use bf_core::{DelegatedResult, ScreenLaunch, StartupEvent};
use bf_platform::WeakStartupHandle;
use tracing::info;

/// Navigator of the headless host.
///
/// Screens are only logged. A screen started for a result completes right away
/// with the configured result code, echoing the request it was given.
pub struct LoggingNavigator {
    handle: WeakStartupHandle,
    result_code: i32,
    returned: Mutex<Option<DelegatedResult>>,
}

impl LoggingNavigator {
    pub fn new(handle: WeakStartupHandle, result_code: i32) -> Self {
        Self {
            handle,
            result_code,
            returned: Mutex::new(None),
        }
    }

    /// Result handed back to the caller, once startup finished with one.
    pub fn returned(&self) -> Option<DelegatedResult> {
        self.returned.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl NavigatorPort for LoggingNavigator {
    async fn start(&self, launch: ScreenLaunch) -> anyhow::Result<()> {
        info!(screen = %launch.screen, "screen started");
        Ok(())
    }

    async fn start_for_result(&self, launch: ScreenLaunch) -> anyhow::Result<()> {
        info!(screen = %launch.screen, "screen started for result");
        let result = DelegatedResult {
            code: self.result_code,
            data: Some(launch.initial_request),
        };
        if !self.handle.send(StartupEvent::DelegatedResultReceived { result }) {
            anyhow::bail!("startup mailbox closed before {} returned", launch.screen);
        }
        Ok(())
    }

    async fn finish(&self) -> anyhow::Result<()> {
        info!("startup screen finished");
        Ok(())
    }

    async fn finish_with_result(&self, result: DelegatedResult) -> anyhow::Result<()> {
        info!(code = result.code, "startup screen finished with result");
        if let Ok(mut returned) = self.returned.lock() {
            *returned = Some(result);
        }
        Ok(())
    }
}
