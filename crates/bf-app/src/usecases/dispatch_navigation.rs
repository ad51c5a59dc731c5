use std::sync::Arc;

use anyhow::Result;
use bf_core::{
    ports::{NavigatorPort, StartupFlagsPort},
    DispatchMode, PendingNavigation, Screen,
};
use tracing::{info, warn};

/// What a navigation dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationDispatched {
    pub screen: Screen,
    pub mode: DispatchMode,
}

/// Start the screen chosen by the navigation decision.
pub struct DispatchNavigation {
    navigator: Arc<dyn NavigatorPort>,
    flags: Arc<dyn StartupFlagsPort>,
}

impl DispatchNavigation {
    pub fn new(navigator: Arc<dyn NavigatorPort>, flags: Arc<dyn StartupFlagsPort>) -> Self {
        Self { navigator, flags }
    }

    pub async fn execute(&self, pending: PendingNavigation) -> Result<NavigationDispatched> {
        let mode = pending.mode();
        let launch = pending.into_launch();
        let screen = launch.screen.clone();

        match mode {
            DispatchMode::AwaitResult => {
                info!(%screen, "starting screen for external caller, awaiting result");
                self.navigator.start_for_result(launch).await?;
            }
            DispatchMode::Direct => {
                if let Err(err) = self.flags.mark_first_run_dialog_seen().await {
                    warn!(error = %err, "failed to persist first-run dialog flag");
                }
                info!(%screen, "starting screen");
                self.navigator.start(launch).await?;
                self.navigator.finish().await?;
            }
        }

        Ok(NavigationDispatched { screen, mode })
    }
}
