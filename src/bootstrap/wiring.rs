//! Assembles the orchestrator's collaborators for the headless host.

use std::path::PathBuf;
use std::sync::Arc;

use bf_app::StartupOrchestratorDeps;
use bf_core::ports::StartupFlagsPort;
use bf_core::{AppDirs, StartupConfig};
use bf_infra::{
    FileStartupFlagsRepository, InMemoryLocationService, SimulatedNativeEngine, TokioInitTimer,
};
use bf_platform::StartupHandle;

use super::settings::HostSettings;
use crate::adapters::{ConfigThemeAdapter, LoggingDialog, LoggingNavigator, SimulatedPermissions};

/// Adapters the host keeps after handing the deps over.
pub struct HostAdapters {
    pub flags: Arc<FileStartupFlagsRepository>,
    pub permissions: Arc<SimulatedPermissions>,
    pub navigator: Arc<LoggingNavigator>,
}

/// Directory handed to the engine; an empty configured path means the default.
pub fn resolve_data_dir(config: &StartupConfig, app_dirs: &AppDirs) -> PathBuf {
    if config.data_dir.as_os_str().is_empty() {
        StartupConfig::with_system_defaults(app_dirs.app_data_root.clone()).data_dir
    } else {
        config.data_dir.clone()
    }
}

/// Orchestrator-owned adapters only get weak handles; `handle` is what keeps
/// the mailbox open.
pub fn wire_dependencies(
    config: &StartupConfig,
    settings: &HostSettings,
    app_dirs: &AppDirs,
    handle: &StartupHandle,
) -> (StartupOrchestratorDeps, HostAdapters) {
    let flags = Arc::new(FileStartupFlagsRepository::with_defaults(
        app_dirs.app_data_root.clone(),
    ));
    let permissions = Arc::new(SimulatedPermissions::new(
        settings.location_granted,
        settings.grant_on_prompt,
        handle.downgrade(),
    ));
    let navigator = Arc::new(LoggingNavigator::new(
        handle.downgrade(),
        settings.delegated_result_code,
    ));

    let mut engine = SimulatedNativeEngine::new(resolve_data_dir(config, app_dirs));
    if settings.async_init {
        engine = engine.with_async_continuation(settings.continuation_delay);
    }

    let deps = StartupOrchestratorDeps {
        themes: Arc::new(ConfigThemeAdapter::new(config.theme.clone())),
        permissions: permissions.clone(),
        flags: flags.clone() as Arc<dyn StartupFlagsPort>,
        engine: Arc::new(engine),
        location: Arc::new(InMemoryLocationService::new()),
        navigator: navigator.clone(),
        dialog: Arc::new(LoggingDialog::new(handle.downgrade())),
        timer: Box::new(TokioInitTimer::new(handle.weak_sender())),
        continuation: Arc::new(handle.downgrade()),
    };

    (
        deps,
        HostAdapters {
            flags,
            permissions,
            navigator,
        },
    )
}
