use serde::Serialize;

use crate::ids::InitTicket;
use crate::navigation::{LaunchRequest, PendingNavigation};

/// Phase of the startup flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StartupPhase {
    /// Nothing scheduled; waiting for the UI to come to the foreground.
    Idle,
    /// Location prompt shown; waiting for its result.
    AwaitingPermission,
    /// Init task scheduled after the fixed delay.
    PendingInit,
    /// Native init invoked; may still be continuing asynchronously.
    InitRunning,
    /// Navigation decided and dispatched.
    Decided,
    /// Torn down before a decision was reached.
    Cancelled,
    /// Native init hit a storage failure.
    Failed,
}

impl StartupPhase {
    /// Terminal phases never transition again.
    pub fn is_terminal(self) -> bool {
        matches!(self, StartupPhase::Cancelled | StartupPhase::Failed)
    }
}

/// Mutable startup state, owned by a single orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartupState {
    pub phase: StartupPhase,
    /// Once set, the phase is frozen and lifecycle events are ignored.
    pub canceled: bool,
    /// Whether the UI is currently in the foreground.
    pub resumed: bool,
    /// Mirror of the persisted "location prompt already shown" flag.
    pub location_requested: bool,
    /// Mirror of the persisted first-launch fact.
    pub first_launch: bool,
    /// Ticket of the single pending init task.
    pub init_ticket: Option<InitTicket>,
    /// Ticket handed out by the next schedule.
    pub next_ticket: InitTicket,
    /// Request that started the orchestrator.
    pub launch_request: LaunchRequest,
    pub pending_navigation: Option<PendingNavigation>,
    /// A delegated screen was started and its result is still outstanding.
    pub awaiting_result: bool,
}

impl StartupState {
    pub fn new(
        launch_request: LaunchRequest,
        location_requested: bool,
        first_launch: bool,
    ) -> Self {
        Self {
            phase: StartupPhase::Idle,
            canceled: false,
            resumed: false,
            location_requested,
            first_launch,
            init_ticket: None,
            next_ticket: InitTicket::first(),
            launch_request,
            pending_navigation: None,
            awaiting_result: false,
        }
    }

    /// Hand out the next init ticket.
    pub(crate) fn issue_ticket(&mut self) -> InitTicket {
        let ticket = self.next_ticket;
        self.next_ticket = ticket.next();
        self.init_ticket = Some(ticket);
        ticket
    }
}
