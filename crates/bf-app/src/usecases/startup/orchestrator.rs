//! Startup orchestrator.
//!
//! This module drives the startup state machine and executes its side effects.
//! It is owned by exactly one task; every event, including callbacks from other
//! threads, reaches it through that task.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, info_span, warn, Instrument};

use bf_core::{
    ports::{
        DialogPort, InitContinuationPort, InitTimerPort, LocationServicePort, NativeEnginePort,
        NavigatorPort, PermissionPort, StartupFlagsPort, ThemePort,
    },
    DelegatedResult, LaunchRequest, PermissionSnapshot, Screen, StartupAction, StartupEvent,
    StartupOutcome, StartupPhase, StartupSessionId, StartupState, StartupStateMachine,
    StorageInitError,
};

use crate::usecases::startup::StartupError;
use crate::usecases::{
    ApplySplashTheme, BootstrapFirstRunLocation, DispatchNavigation, NavigationDispatched,
};

/// Delay between resume and native init when none is configured.
pub const DEFAULT_INIT_DELAY: Duration = Duration::from_millis(100);

/// Dependency bundle for [`StartupOrchestrator`].
pub struct StartupOrchestratorDeps {
    pub themes: Arc<dyn ThemePort>,
    pub permissions: Arc<dyn PermissionPort>,
    pub flags: Arc<dyn StartupFlagsPort>,
    pub engine: Arc<dyn NativeEnginePort>,
    pub location: Arc<dyn LocationServicePort>,
    pub navigator: Arc<dyn NavigatorPort>,
    pub dialog: Arc<dyn DialogPort>,
    pub timer: Box<dyn InitTimerPort>,
    pub continuation: Arc<dyn InitContinuationPort>,
}

/// Orchestrator that drives startup state and side effects.
pub struct StartupOrchestrator {
    session_id: StartupSessionId,
    state: StartupState,
    init_delay: Duration,
    outcome: Option<StartupOutcome>,
    delegated_screen: Option<Screen>,
    failure: Option<StorageInitError>,

    permissions: Arc<dyn PermissionPort>,
    flags: Arc<dyn StartupFlagsPort>,
    engine: Arc<dyn NativeEnginePort>,
    navigator: Arc<dyn NavigatorPort>,
    dialog: Arc<dyn DialogPort>,
    timer: Box<dyn InitTimerPort>,
    continuation: Arc<dyn InitContinuationPort>,
    bootstrap_location: BootstrapFirstRunLocation,
    dispatch_navigation: DispatchNavigation,
}

impl StartupOrchestrator {
    /// Build the orchestrator for the request that launched it.
    ///
    /// Fails with [`StartupError::Configuration`] when the user's theme has no
    /// splash variant.
    pub async fn new(
        deps: StartupOrchestratorDeps,
        launch_request: LaunchRequest,
        init_delay: Option<Duration>,
    ) -> Result<Self, StartupError> {
        let StartupOrchestratorDeps {
            themes,
            permissions,
            flags,
            engine,
            location,
            navigator,
            dialog,
            mut timer,
            continuation,
        } = deps;

        ApplySplashTheme::new(themes).execute()?;

        // A previous instance may have left its init task armed.
        timer.stop().await?;

        let location_requested = flags.is_location_requested().await?;
        let first_launch = flags.is_first_launch().await?;
        let session_id = StartupSessionId::new();
        info!(
            session = %session_id,
            location_requested,
            first_launch,
            "startup orchestrator created"
        );

        Ok(Self {
            session_id,
            state: StartupState::new(launch_request, location_requested, first_launch),
            init_delay: init_delay.unwrap_or(DEFAULT_INIT_DELAY),
            outcome: None,
            delegated_screen: None,
            failure: None,
            bootstrap_location: BootstrapFirstRunLocation::new(permissions.clone(), location),
            dispatch_navigation: DispatchNavigation::new(navigator.clone(), flags.clone()),
            permissions,
            flags,
            engine,
            navigator,
            dialog,
            timer,
            continuation,
        })
    }

    pub fn session_id(&self) -> &StartupSessionId {
        &self.session_id
    }

    pub fn state(&self) -> &StartupState {
        &self.state
    }

    pub fn phase(&self) -> StartupPhase {
        self.state.phase
    }

    /// Set once the startup screen is gone.
    pub fn outcome(&self) -> Option<&StartupOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub async fn resume(&mut self) -> Result<StartupPhase, StartupError> {
        let permissions = self.permissions.location_snapshot();
        self.dispatch(StartupEvent::Resumed { permissions }).await
    }

    pub async fn pause(&mut self) -> Result<StartupPhase, StartupError> {
        self.dispatch(StartupEvent::Paused).await
    }

    pub async fn permission_result(
        &mut self,
        grants: PermissionSnapshot,
    ) -> Result<StartupPhase, StartupError> {
        self.dispatch(StartupEvent::PermissionResult { grants }).await
    }

    pub async fn init_completed(&mut self) -> Result<StartupPhase, StartupError> {
        self.dispatch(StartupEvent::InitCompleted).await
    }

    pub async fn delegated_result(
        &mut self,
        result: DelegatedResult,
    ) -> Result<StartupPhase, StartupError> {
        self.dispatch(StartupEvent::DelegatedResultReceived { result })
            .await
    }

    pub async fn destroy(&mut self) -> Result<StartupPhase, StartupError> {
        self.dispatch(StartupEvent::Destroyed).await
    }

    /// Feed one event through the state machine and run the resulting actions,
    /// including any follow-up events those actions produce.
    pub async fn dispatch(&mut self, event: StartupEvent) -> Result<StartupPhase, StartupError> {
        let span = info_span!(
            "usecase.startup_orchestrator.dispatch",
            session = %self.session_id,
            event = ?event
        );
        async {
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = self.state.phase;
                let destroyed = event == StartupEvent::Destroyed;
                let event_name = format!("{:?}", event);
                let (next, actions) = StartupStateMachine::transition(self.state.clone(), event);
                info!(
                    from = ?from,
                    to = ?next.phase,
                    event = %event_name,
                    "startup state transition"
                );
                self.state = next;

                let follow_up_events = self.execute_actions(actions).await?;
                pending_events.extend(follow_up_events);

                if destroyed && self.outcome.is_none() {
                    self.outcome = Some(StartupOutcome::Destroyed { phase: from });
                }
            }

            Ok(self.state.phase)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &mut self,
        actions: Vec<StartupAction>,
    ) -> Result<Vec<StartupEvent>, StartupError> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "startup executing action");
            match action {
                StartupAction::RequestPermissions { permissions } => {
                    if let Err(err) = self.permissions.request(&permissions).await {
                        // Grants never gate startup; treat a failed prompt as answered.
                        warn!(error = %err, "permission prompt failed, continuing startup");
                        follow_up_events.push(StartupEvent::PermissionResult {
                            grants: self.permissions.location_snapshot(),
                        });
                    }
                }
                StartupAction::PersistLocationRequested => {
                    if let Err(err) = self.flags.set_location_requested().await {
                        warn!(error = %err, "failed to persist location-requested flag");
                    }
                }
                StartupAction::ScheduleInit { ticket } => {
                    self.timer.start(ticket, self.init_delay).await?;
                    debug!(
                        %ticket,
                        delay_ms = self.init_delay.as_millis() as u64,
                        "init scheduled"
                    );
                }
                StartupAction::CancelScheduledInit => {
                    self.timer.stop().await?;
                }
                StartupAction::RunNativeInit => {
                    follow_up_events.push(self.run_native_init().await);
                }
                StartupAction::BootstrapFirstRunLocation => {
                    if let Err(err) = self.bootstrap_location.execute().await {
                        warn!(error = %err, "first-run location bootstrap failed");
                    }
                }
                StartupAction::DispatchNavigation => {
                    let Some(pending) = self.state.pending_navigation.take() else {
                        warn!("navigation dispatch requested without a pending navigation");
                        continue;
                    };
                    let NavigationDispatched { screen, mode } =
                        self.dispatch_navigation.execute(pending).await?;
                    if self.state.awaiting_result {
                        self.delegated_screen = Some(screen);
                    } else {
                        self.outcome = Some(StartupOutcome::Navigated { screen, mode });
                    }
                }
                StartupAction::ShowFatalError { dialog } => {
                    self.dialog.show_fatal(dialog).await?;
                }
                StartupAction::PropagateResult { result } => {
                    let code = result.code;
                    self.navigator.finish_with_result(result).await?;
                    info!(code, "delegated result propagated to caller");
                    let screen = self
                        .delegated_screen
                        .take()
                        .unwrap_or(Screen::DownloadResources);
                    self.outcome = Some(StartupOutcome::ResultPropagated { screen, code });
                }
                StartupAction::Finish => {
                    self.navigator.finish().await?;
                    if let Some(error) = self.failure.take() {
                        self.outcome = Some(StartupOutcome::Failed { error });
                    }
                }
            }
        }

        Ok(follow_up_events)
    }

    async fn run_native_init(&mut self) -> StartupEvent {
        let span = info_span!("usecase.startup_orchestrator.native_init");
        match self
            .engine
            .init(self.continuation.clone())
            .instrument(span)
            .await
        {
            Ok(outcome) => {
                info!(async_continue = outcome.async_continue, "native init returned");
                StartupEvent::InitSucceeded { outcome }
            }
            Err(error) => {
                error!(error = %error, "native init failed on storage");
                self.failure = Some(error.clone());
                StartupEvent::InitFailed { error }
            }
        }
    }
}
