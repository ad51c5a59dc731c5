use serde::{Deserialize, Serialize};

use super::{LaunchRequest, Screen};

/// How the chosen screen is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchMode {
    /// Start and finish; nobody waits for an answer.
    Direct,
    /// Start, wait for the screen's result and hand it back to the original caller.
    AwaitResult,
}

/// Classification of the navigation decision.
///
/// `MainScreenDirect` covers any explicit override started without awaiting;
/// `MainScreenAwaitResult` covers every delegated start regardless of screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    FirstRunDownload,
    MainScreenDirect,
    MainScreenAwaitResult,
}

/// Navigation built once init is done and consumed by a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingNavigation {
    pub target_kind: TargetKind,
    pub forwarded_payload: LaunchRequest,
    pub requested_activity_override: Option<Screen>,
}

impl PendingNavigation {
    /// Decide where startup goes for the request that launched the orchestrator.
    pub fn resolve(input: &LaunchRequest) -> Self {
        let requested_activity_override = input.activity_to_start.clone();
        let forwarded_payload = match &input.initial_request {
            Some(initial) => initial.as_ref().clone(),
            None => input.clone(),
        };

        let target_kind = if !forwarded_payload.is_from_launcher() {
            TargetKind::MainScreenAwaitResult
        } else if requested_activity_override.is_some() {
            TargetKind::MainScreenDirect
        } else {
            TargetKind::FirstRunDownload
        };

        Self {
            target_kind,
            forwarded_payload,
            requested_activity_override,
        }
    }

    pub fn screen(&self) -> Screen {
        self.requested_activity_override
            .clone()
            .unwrap_or(Screen::DownloadResources)
    }

    pub fn mode(&self) -> DispatchMode {
        match self.target_kind {
            TargetKind::MainScreenAwaitResult => DispatchMode::AwaitResult,
            TargetKind::FirstRunDownload | TargetKind::MainScreenDirect => DispatchMode::Direct,
        }
    }

    pub fn into_launch(self) -> ScreenLaunch {
        ScreenLaunch {
            screen: self.screen(),
            initial_request: self.forwarded_payload,
        }
    }
}

/// Start request for a downstream screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenLaunch {
    pub screen: Screen,
    pub initial_request: LaunchRequest,
}

impl ScreenLaunch {
    /// Request a screen uses to route the user back through the orchestrator
    /// without overriding the target.
    pub fn reentry_request(&self) -> LaunchRequest {
        LaunchRequest::splash(None, Some(self.initial_request.clone()))
    }
}

/// Result returned by a screen started in `AwaitResult` mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatedResult {
    pub code: i32,
    pub data: Option<LaunchRequest>,
}

impl DelegatedResult {
    pub const RESULT_OK: i32 = -1;
    pub const RESULT_CANCELED: i32 = 0;

    pub fn ok(data: Option<LaunchRequest>) -> Self {
        Self {
            code: Self::RESULT_OK,
            data,
        }
    }

    pub fn canceled() -> Self {
        Self {
            code: Self::RESULT_CANCELED,
            data: None,
        }
    }
}
