use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bf_app::{StartupError, StartupOrchestrator, StartupOrchestratorDeps};
use bf_core::ports::{
    DialogPort, InitContinuationPort, InitTimerPort, LocationServicePort, NativeEnginePort,
    NavigatorPort, PermissionPort, StartupFlagsPort, ThemePort,
};
use bf_core::{
    ConfigurationError, DelegatedResult, DispatchMode, FatalDialog, InitOutcome, InitTicket,
    LaunchRequest, Permission, PermissionSnapshot, Screen, ScreenLaunch, SplashTheme,
    StartupEvent, StartupOutcome, StartupPhase, StorageInitError, ThemeId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum NavCall {
    Start(ScreenLaunch),
    StartForResult(ScreenLaunch),
    Finish,
    FinishWithResult(DelegatedResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TimerCall {
    Start(InitTicket, Duration),
    Stop,
}

struct FixedTheme {
    theme: &'static str,
    applied: Arc<Mutex<Vec<SplashTheme>>>,
}

impl ThemePort for FixedTheme {
    fn current_theme(&self) -> ThemeId {
        ThemeId::from(self.theme)
    }

    fn is_default_theme(&self, theme: &ThemeId) -> bool {
        theme.as_str() == "default"
    }

    fn is_night_theme(&self, theme: &ThemeId) -> bool {
        theme.as_str() == "night"
    }

    fn apply_splash_theme(&self, theme: SplashTheme) {
        self.applied.lock().unwrap().push(theme);
    }
}

struct RecordingPermissions {
    granted: Mutex<PermissionSnapshot>,
    requests: Arc<Mutex<Vec<Vec<Permission>>>>,
    fail_request: bool,
}

#[async_trait]
impl PermissionPort for RecordingPermissions {
    fn is_granted(&self, permission: Permission) -> bool {
        let granted = self.granted.lock().unwrap();
        match permission {
            Permission::CoarseLocation => granted.coarse_location,
            Permission::FineLocation => granted.fine_location,
        }
    }

    async fn request(&self, permissions: &[Permission]) -> anyhow::Result<()> {
        self.requests.lock().unwrap().push(permissions.to_vec());
        if self.fail_request {
            anyhow::bail!("prompt unavailable");
        }
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryFlags {
    location_requested: AtomicBool,
    first_launch: AtomicBool,
    dialog_seen: AtomicBool,
    location_writes: AtomicUsize,
}

#[async_trait]
impl StartupFlagsPort for InMemoryFlags {
    async fn is_location_requested(&self) -> anyhow::Result<bool> {
        Ok(self.location_requested.load(Ordering::SeqCst))
    }

    async fn set_location_requested(&self) -> anyhow::Result<()> {
        self.location_writes.fetch_add(1, Ordering::SeqCst);
        self.location_requested.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn is_first_launch(&self) -> anyhow::Result<bool> {
        Ok(self.first_launch.load(Ordering::SeqCst))
    }

    async fn mark_first_run_dialog_seen(&self) -> anyhow::Result<()> {
        self.dialog_seen.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn register_launch(&self) -> anyhow::Result<u64> {
        Ok(1)
    }
}

struct ScriptedEngine {
    result: Result<InitOutcome, StorageInitError>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl NativeEnginePort for ScriptedEngine {
    async fn init(
        &self,
        _continuation: Arc<dyn InitContinuationPort>,
    ) -> Result<InitOutcome, StorageInitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

#[derive(Default)]
struct RecordingLocation {
    active: AtomicBool,
    first_run: AtomicUsize,
    starts: AtomicUsize,
}

#[async_trait]
impl LocationServicePort for RecordingLocation {
    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    async fn start(&self) -> anyhow::Result<()> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.active.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn on_entered_first_run(&self) {
        self.first_run.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct RecordingNavigator {
    calls: Mutex<Vec<NavCall>>,
}

#[async_trait]
impl NavigatorPort for RecordingNavigator {
    async fn start(&self, launch: ScreenLaunch) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(NavCall::Start(launch));
        Ok(())
    }

    async fn start_for_result(&self, launch: ScreenLaunch) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(NavCall::StartForResult(launch));
        Ok(())
    }

    async fn finish(&self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(NavCall::Finish);
        Ok(())
    }

    async fn finish_with_result(&self, result: DelegatedResult) -> anyhow::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(NavCall::FinishWithResult(result));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingDialog {
    shown: Mutex<Vec<FatalDialog>>,
}

#[async_trait]
impl DialogPort for RecordingDialog {
    async fn show_fatal(&self, dialog: FatalDialog) -> anyhow::Result<()> {
        self.shown.lock().unwrap().push(dialog);
        Ok(())
    }
}

struct RecordingTimer {
    calls: Arc<Mutex<Vec<TimerCall>>>,
}

#[async_trait]
impl InitTimerPort for RecordingTimer {
    async fn start(&mut self, ticket: InitTicket, delay: Duration) -> anyhow::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(TimerCall::Start(ticket, delay));
        Ok(())
    }

    async fn stop(&mut self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(TimerCall::Stop);
        Ok(())
    }
}

#[derive(Default)]
struct CountingContinuation {
    calls: AtomicUsize,
}

impl InitContinuationPort for CountingContinuation {
    fn init_completed(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

struct Harness {
    theme: &'static str,
    granted: PermissionSnapshot,
    fail_permission_request: bool,
    engine_result: Result<InitOutcome, StorageInitError>,
    location_requested: bool,
    first_launch: bool,

    applied_themes: Arc<Mutex<Vec<SplashTheme>>>,
    permission_requests: Arc<Mutex<Vec<Vec<Permission>>>>,
    flags: Arc<InMemoryFlags>,
    engine_calls: Arc<AtomicUsize>,
    location: Arc<RecordingLocation>,
    navigator: Arc<RecordingNavigator>,
    dialog: Arc<RecordingDialog>,
    timer_calls: Arc<Mutex<Vec<TimerCall>>>,
}

impl Harness {
    fn new() -> Self {
        Self {
            theme: "default",
            granted: PermissionSnapshot::denied(),
            fail_permission_request: false,
            engine_result: Ok(InitOutcome {
                async_continue: false,
            }),
            location_requested: false,
            first_launch: false,
            applied_themes: Arc::default(),
            permission_requests: Arc::default(),
            flags: Arc::default(),
            engine_calls: Arc::default(),
            location: Arc::default(),
            navigator: Arc::default(),
            dialog: Arc::default(),
            timer_calls: Arc::default(),
        }
    }

    async fn build(
        &self,
        launch: LaunchRequest,
    ) -> Result<StartupOrchestrator, StartupError> {
        self.flags
            .location_requested
            .store(self.location_requested, Ordering::SeqCst);
        self.flags
            .first_launch
            .store(self.first_launch, Ordering::SeqCst);

        let deps = StartupOrchestratorDeps {
            themes: Arc::new(FixedTheme {
                theme: self.theme,
                applied: self.applied_themes.clone(),
            }),
            permissions: Arc::new(RecordingPermissions {
                granted: Mutex::new(self.granted),
                requests: self.permission_requests.clone(),
                fail_request: self.fail_permission_request,
            }),
            flags: self.flags.clone(),
            engine: Arc::new(ScriptedEngine {
                result: self.engine_result.clone(),
                calls: self.engine_calls.clone(),
            }),
            location: self.location.clone(),
            navigator: self.navigator.clone(),
            dialog: self.dialog.clone(),
            timer: Box::new(RecordingTimer {
                calls: self.timer_calls.clone(),
            }),
            continuation: Arc::new(CountingContinuation::default()),
        };
        StartupOrchestrator::new(deps, launch, Some(Duration::from_millis(100))).await
    }

    fn nav_calls(&self) -> Vec<NavCall> {
        self.navigator.calls.lock().unwrap().clone()
    }

    fn timer_starts(&self) -> Vec<InitTicket> {
        self.timer_calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                TimerCall::Start(ticket, _) => Some(*ticket),
                TimerCall::Stop => None,
            })
            .collect()
    }
}

async fn fire_timer(orchestrator: &mut StartupOrchestrator) -> StartupPhase {
    let ticket = orchestrator
        .state()
        .init_ticket
        .expect("timer should be armed");
    orchestrator
        .dispatch(StartupEvent::InitDelayElapsed { ticket })
        .await
        .expect("dispatch timer fire")
}

#[tokio::test]
async fn construction_applies_theme_and_stops_stale_timer() {
    let harness = Harness::new();
    let orchestrator = harness
        .build(LaunchRequest::launcher())
        .await
        .expect("build orchestrator");

    assert_eq!(orchestrator.phase(), StartupPhase::Idle);
    assert_eq!(
        harness.applied_themes.lock().unwrap().as_slice(),
        &[SplashTheme::Default]
    );
    assert_eq!(
        harness.timer_calls.lock().unwrap().as_slice(),
        &[TimerCall::Stop]
    );
}

#[tokio::test]
async fn construction_fails_on_unsupported_theme() {
    let mut harness = Harness::new();
    harness.theme = "high-contrast";

    let err = harness
        .build(LaunchRequest::launcher())
        .await
        .err()
        .expect("unsupported theme must abort construction");

    assert!(matches!(
        err,
        StartupError::Configuration(ConfigurationError::UnsupportedTheme { ref theme })
            if theme.as_str() == "high-contrast"
    ));
    assert!(harness.applied_themes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn first_resume_without_grants_prompts_and_does_not_schedule() {
    let harness = Harness::new();
    let mut orchestrator = harness.build(LaunchRequest::launcher()).await.unwrap();

    let phase = orchestrator.resume().await.unwrap();

    assert_eq!(phase, StartupPhase::AwaitingPermission);
    assert_eq!(
        harness.permission_requests.lock().unwrap().as_slice(),
        &[vec![Permission::CoarseLocation, Permission::FineLocation]]
    );
    assert!(harness.timer_starts().is_empty());
}

#[tokio::test]
async fn permission_result_persists_flag_and_schedules_regardless_of_grant() {
    for grants in [PermissionSnapshot::denied(), PermissionSnapshot::granted()] {
        let harness = Harness::new();
        let mut orchestrator = harness.build(LaunchRequest::launcher()).await.unwrap();
        orchestrator.resume().await.unwrap();

        let phase = orchestrator.permission_result(grants).await.unwrap();

        assert_eq!(phase, StartupPhase::PendingInit);
        assert!(harness.flags.location_requested.load(Ordering::SeqCst));
        assert_eq!(harness.flags.location_writes.load(Ordering::SeqCst), 1);
        assert_eq!(harness.timer_starts(), vec![InitTicket::first()]);
        assert!(harness
            .timer_calls
            .lock()
            .unwrap()
            .contains(&TimerCall::Start(InitTicket::first(), Duration::from_millis(100))));
    }
}

#[tokio::test]
async fn failed_permission_prompt_still_proceeds_to_init() {
    let mut harness = Harness::new();
    harness.fail_permission_request = true;
    let mut orchestrator = harness.build(LaunchRequest::launcher()).await.unwrap();

    let phase = orchestrator.resume().await.unwrap();

    assert_eq!(phase, StartupPhase::PendingInit);
    assert!(harness.flags.location_requested.load(Ordering::SeqCst));
}

#[tokio::test]
async fn sync_init_from_launcher_starts_download_screen_directly() {
    let mut harness = Harness::new();
    harness.location_requested = true;
    let launch = LaunchRequest::launcher();
    let mut orchestrator = harness.build(launch.clone()).await.unwrap();

    assert_eq!(orchestrator.resume().await.unwrap(), StartupPhase::PendingInit);
    let phase = fire_timer(&mut orchestrator).await;

    assert_eq!(phase, StartupPhase::Decided);
    assert_eq!(harness.engine_calls.load(Ordering::SeqCst), 1);
    assert!(harness.flags.dialog_seen.load(Ordering::SeqCst));
    assert_eq!(
        harness.nav_calls(),
        vec![
            NavCall::Start(ScreenLaunch {
                screen: Screen::DownloadResources,
                initial_request: launch,
            }),
            NavCall::Finish,
        ]
    );
    assert_eq!(
        orchestrator.outcome(),
        Some(&StartupOutcome::Navigated {
            screen: Screen::DownloadResources,
            mode: DispatchMode::Direct,
        })
    );
    assert!(orchestrator.is_finished());
}

#[tokio::test]
async fn override_without_launcher_category_awaits_and_propagates_result() {
    let mut harness = Harness::new();
    harness.granted = PermissionSnapshot::granted();
    let inner = LaunchRequest::default()
        .with_action("action.view")
        .with_data("geo:0,0");
    let launch = LaunchRequest::splash(Some(Screen::Main), Some(inner.clone()));
    let mut orchestrator = harness.build(launch).await.unwrap();

    orchestrator.resume().await.unwrap();
    let phase = fire_timer(&mut orchestrator).await;

    assert_eq!(phase, StartupPhase::Decided);
    assert!(!harness.flags.dialog_seen.load(Ordering::SeqCst));
    assert_eq!(
        harness.nav_calls(),
        vec![NavCall::StartForResult(ScreenLaunch {
            screen: Screen::Main,
            initial_request: inner,
        })]
    );
    assert!(!orchestrator.is_finished());

    let result = DelegatedResult {
        code: 42,
        data: Some(LaunchRequest::default().with_extra("picked", "7")),
    };
    orchestrator.delegated_result(result.clone()).await.unwrap();

    assert_eq!(
        harness.nav_calls().last(),
        Some(&NavCall::FinishWithResult(result))
    );
    assert_eq!(
        orchestrator.outcome(),
        Some(&StartupOutcome::ResultPropagated {
            screen: Screen::Main,
            code: 42,
        })
    );
}

#[tokio::test]
async fn storage_failure_shows_fatal_dialog_and_ignores_later_resume() {
    let mut harness = Harness::new();
    harness.location_requested = true;
    let failure = StorageInitError::new("data dir not writable");
    harness.engine_result = Err(failure.clone());
    let mut orchestrator = harness.build(LaunchRequest::launcher()).await.unwrap();

    orchestrator.resume().await.unwrap();
    let phase = fire_timer(&mut orchestrator).await;

    assert_eq!(phase, StartupPhase::Failed);
    assert!(orchestrator.state().canceled);
    assert_eq!(
        harness.dialog.shown.lock().unwrap().as_slice(),
        &[FatalDialog::storage()]
    );

    let starts_before = harness.timer_starts().len();
    assert_eq!(orchestrator.resume().await.unwrap(), StartupPhase::Failed);
    assert_eq!(harness.timer_starts().len(), starts_before);
    assert!(harness.nav_calls().is_empty());
    assert!(!orchestrator.is_finished());

    orchestrator
        .dispatch(StartupEvent::FatalDialogAcknowledged)
        .await
        .unwrap();
    assert_eq!(harness.nav_calls(), vec![NavCall::Finish]);
    assert_eq!(
        orchestrator.outcome(),
        Some(&StartupOutcome::Failed { error: failure })
    );
}

#[tokio::test]
async fn async_init_waits_for_completion_and_decides_once() {
    let mut harness = Harness::new();
    harness.location_requested = true;
    harness.engine_result = Ok(InitOutcome {
        async_continue: true,
    });
    let mut orchestrator = harness.build(LaunchRequest::launcher()).await.unwrap();

    orchestrator.resume().await.unwrap();
    assert_eq!(fire_timer(&mut orchestrator).await, StartupPhase::InitRunning);
    assert!(harness.nav_calls().is_empty());

    assert_eq!(orchestrator.init_completed().await.unwrap(), StartupPhase::Decided);
    assert_eq!(orchestrator.init_completed().await.unwrap(), StartupPhase::Decided);

    let starts = harness
        .nav_calls()
        .into_iter()
        .filter(|call| matches!(call, NavCall::Start(_)))
        .count();
    assert_eq!(starts, 1);
}

#[tokio::test]
async fn pause_cancels_pending_init_and_resume_reschedules_once() {
    let mut harness = Harness::new();
    harness.location_requested = true;
    let mut orchestrator = harness.build(LaunchRequest::launcher()).await.unwrap();

    orchestrator.resume().await.unwrap();
    let stale = orchestrator.state().init_ticket.unwrap();
    assert_eq!(orchestrator.pause().await.unwrap(), StartupPhase::Idle);
    assert_eq!(
        harness.timer_calls.lock().unwrap().last(),
        Some(&TimerCall::Stop)
    );

    let phase = orchestrator
        .dispatch(StartupEvent::InitDelayElapsed { ticket: stale })
        .await
        .unwrap();
    assert_eq!(phase, StartupPhase::Idle);
    assert_eq!(harness.engine_calls.load(Ordering::SeqCst), 0);

    orchestrator.resume().await.unwrap();
    let starts = harness.timer_starts();
    assert_eq!(starts.len(), 2);
    assert_ne!(starts[0], starts[1]);

    fire_timer(&mut orchestrator).await;
    assert_eq!(harness.engine_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn first_launch_with_grant_bootstraps_location_tracking() {
    let mut harness = Harness::new();
    harness.granted = PermissionSnapshot::granted();
    harness.first_launch = true;
    let mut orchestrator = harness.build(LaunchRequest::launcher()).await.unwrap();

    orchestrator.resume().await.unwrap();
    fire_timer(&mut orchestrator).await;

    assert_eq!(harness.location.first_run.load(Ordering::SeqCst), 1);
    assert_eq!(harness.location.starts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn destroy_cancels_timer_and_records_phase() {
    let mut harness = Harness::new();
    harness.location_requested = true;
    let mut orchestrator = harness.build(LaunchRequest::launcher()).await.unwrap();

    orchestrator.resume().await.unwrap();
    let phase = orchestrator.destroy().await.unwrap();

    assert_eq!(phase, StartupPhase::Cancelled);
    assert_eq!(
        harness.timer_calls.lock().unwrap().last(),
        Some(&TimerCall::Stop)
    );
    assert_eq!(
        orchestrator.outcome(),
        Some(&StartupOutcome::Destroyed {
            phase: StartupPhase::PendingInit,
        })
    );
}
