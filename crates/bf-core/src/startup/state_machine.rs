//! Startup state machine.
//!
//! Defines a pure state transition function for the startup flow. Facts that come
//! from collaborators (current grants, init results) arrive inside the events, so
//! the machine never reaches out to the outside world.

use crate::navigation::{DispatchMode, PendingNavigation};
use crate::permission::{Permission, PermissionSnapshot};
use crate::startup::{FatalDialog, StartupAction, StartupEvent, StartupPhase, StartupState};

/// Pure startup state machine.
pub struct StartupStateMachine;

impl StartupStateMachine {
    pub fn transition(
        mut state: StartupState,
        event: StartupEvent,
    ) -> (StartupState, Vec<StartupAction>) {
        if state.canceled {
            return Self::transition_canceled(state, event);
        }

        match event {
            StartupEvent::Resumed { permissions } => {
                state.resumed = true;
                Self::on_resumed(state, permissions)
            }
            StartupEvent::Paused => {
                state.resumed = false;
                if state.phase == StartupPhase::PendingInit {
                    state.phase = StartupPhase::Idle;
                    state.init_ticket = None;
                    return (state, vec![StartupAction::CancelScheduledInit]);
                }
                (state, Vec::new())
            }
            StartupEvent::PermissionResult { .. } => {
                let mut actions = Vec::new();
                if !state.location_requested {
                    state.location_requested = true;
                    actions.push(StartupAction::PersistLocationRequested);
                }
                if state.phase == StartupPhase::AwaitingPermission {
                    if state.resumed {
                        actions.extend(Self::schedule_init(&mut state));
                    } else {
                        // The next resume schedules; init never runs in the background.
                        state.phase = StartupPhase::Idle;
                    }
                }
                (state, actions)
            }
            StartupEvent::InitDelayElapsed { ticket } => {
                let current = state.phase == StartupPhase::PendingInit
                    && state.init_ticket == Some(ticket)
                    && state.resumed;
                if !current {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%ticket, phase = ?state.phase, "ignoring stale init task");
                    return (state, Vec::new());
                }
                state.init_ticket = None;
                state.phase = StartupPhase::InitRunning;
                (state, vec![StartupAction::RunNativeInit])
            }
            StartupEvent::InitSucceeded { outcome } => {
                if state.phase != StartupPhase::InitRunning {
                    return (state, Vec::new());
                }
                let mut actions = Vec::new();
                if state.first_launch {
                    actions.push(StartupAction::BootstrapFirstRunLocation);
                }
                if !outcome.async_continue {
                    actions.extend(Self::decide(&mut state));
                }
                (state, actions)
            }
            StartupEvent::InitFailed { .. } => {
                if state.phase != StartupPhase::InitRunning {
                    return (state, Vec::new());
                }
                state.phase = StartupPhase::Failed;
                state.canceled = true;
                (
                    state,
                    vec![StartupAction::ShowFatalError {
                        dialog: FatalDialog::storage(),
                    }],
                )
            }
            StartupEvent::InitCompleted => {
                if state.phase != StartupPhase::InitRunning {
                    return (state, Vec::new());
                }
                let actions = Self::decide(&mut state);
                (state, actions)
            }
            StartupEvent::DelegatedResultReceived { result } => {
                if state.phase != StartupPhase::Decided || !state.awaiting_result {
                    return (state, Vec::new());
                }
                state.awaiting_result = false;
                (state, vec![StartupAction::PropagateResult { result }])
            }
            // Only a failed flow shows the dialog, and a failed flow is canceled.
            StartupEvent::FatalDialogAcknowledged => (state, Vec::new()),
            StartupEvent::Destroyed => {
                state.resumed = false;
                state.phase = StartupPhase::Cancelled;
                state.canceled = true;
                let mut actions = Vec::new();
                if state.init_ticket.take().is_some() {
                    actions.push(StartupAction::CancelScheduledInit);
                }
                (state, actions)
            }
        }
    }

    fn transition_canceled(
        mut state: StartupState,
        event: StartupEvent,
    ) -> (StartupState, Vec<StartupAction>) {
        match event {
            StartupEvent::FatalDialogAcknowledged if state.phase == StartupPhase::Failed => {
                (state, vec![StartupAction::Finish])
            }
            StartupEvent::Paused | StartupEvent::Destroyed => {
                state.resumed = false;
                let mut actions = Vec::new();
                if state.init_ticket.take().is_some() {
                    actions.push(StartupAction::CancelScheduledInit);
                }
                (state, actions)
            }
            _ => (state, Vec::new()),
        }
    }

    fn on_resumed(
        mut state: StartupState,
        permissions: PermissionSnapshot,
    ) -> (StartupState, Vec<StartupAction>) {
        match state.phase {
            StartupPhase::Idle => {
                if !state.location_requested && !permissions.any_location() {
                    state.phase = StartupPhase::AwaitingPermission;
                    return (
                        state,
                        vec![StartupAction::RequestPermissions {
                            permissions: Permission::LOCATION.to_vec(),
                        }],
                    );
                }
                let actions = Self::schedule_init(&mut state);
                (state, actions)
            }
            StartupPhase::AwaitingPermission => {
                // The prompt is still up unless the user granted from elsewhere.
                if !permissions.any_location() {
                    return (state, Vec::new());
                }
                let actions = Self::schedule_init(&mut state);
                (state, actions)
            }
            StartupPhase::PendingInit => {
                let actions = Self::schedule_init(&mut state);
                (state, actions)
            }
            StartupPhase::InitRunning
            | StartupPhase::Decided
            | StartupPhase::Cancelled
            | StartupPhase::Failed => (state, Vec::new()),
        }
    }

    /// At most one init task is pending: a live ticket is invalidated first.
    fn schedule_init(state: &mut StartupState) -> Vec<StartupAction> {
        let mut actions = Vec::new();
        if state.init_ticket.is_some() {
            actions.push(StartupAction::CancelScheduledInit);
        }
        let ticket = state.issue_ticket();
        state.phase = StartupPhase::PendingInit;
        actions.push(StartupAction::ScheduleInit { ticket });
        actions
    }

    fn decide(state: &mut StartupState) -> Vec<StartupAction> {
        let pending = PendingNavigation::resolve(&state.launch_request);
        state.awaiting_result = pending.mode() == DispatchMode::AwaitResult;
        state.pending_navigation = Some(pending);
        state.phase = StartupPhase::Decided;
        vec![StartupAction::DispatchNavigation]
    }
}
