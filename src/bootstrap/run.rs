use std::time::Duration;

use bf_app::StartupOrchestrator;
use bf_core::ports::{PermissionPort, StartupFlagsPort};
use bf_core::{AppDirs, StartupOutcome};
use bf_platform::{startup_channel, StartupRuntime};
use tracing::{info, info_span, warn, Instrument};

use super::config::BootflowConfig;
use super::settings::HostSettings;
use super::wiring::wire_dependencies;

/// Run one startup sequence and report how it ended.
///
/// Construction failures (an unsupported theme) and collaborator failures are
/// returned as errors; a storage failure during init is a regular
/// [`StartupOutcome::Failed`].
pub async fn run_app(
    config: BootflowConfig,
    settings: HostSettings,
    app_dirs: AppDirs,
) -> anyhow::Result<StartupOutcome> {
    let span = info_span!("bootstrap.run_app", data_root = %app_dirs.app_data_root.display());
    async move {
        let (handle, mailbox) = startup_channel();
        let (deps, adapters) = wire_dependencies(&config.startup, &settings, &app_dirs, &handle);

        let launch_count = adapters.flags.register_launch().await?;
        info!(launch_count, "starting up");

        let init_delay = config.startup.init_delay_ms.map(Duration::from_millis);
        let orchestrator =
            StartupOrchestrator::new(deps, settings.launch_request(), init_delay).await?;
        let runtime = tokio::spawn(StartupRuntime::new(orchestrator, mailbox).run());

        let interrupt = handle.clone();
        let ctrl_c = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupted, tearing startup down");
                interrupt.destroy();
            }
        });

        handle.resume(adapters.permissions.location_snapshot());

        let outcome = runtime.await;
        ctrl_c.abort();
        let outcome = outcome??;

        if let Some(result) = adapters.navigator.returned() {
            info!(code = result.code, "caller received delegated result");
        }
        Ok(outcome)
    }
    .instrument(span)
    .await
}
