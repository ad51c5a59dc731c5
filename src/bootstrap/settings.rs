use std::time::Duration;

use bf_core::{DelegatedResult, LaunchRequest, Screen};
use bf_infra::engine::DEFAULT_CONTINUATION_DELAY;

use super::config::HostConfig;

/// Action of a deep link start (anything that is not the launcher icon).
pub const ACTION_VIEW: &str = "action.view";

/// Simulated environment with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSettings {
    pub location_granted: bool,
    pub grant_on_prompt: bool,
    pub from_launcher: bool,
    pub activity: Option<Screen>,
    pub async_init: bool,
    pub continuation_delay: Duration,
    pub delegated_result_code: i32,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self::resolve(&HostConfig::default())
    }
}

impl HostSettings {
    pub fn resolve(host: &HostConfig) -> Self {
        Self {
            location_granted: host.location_granted.unwrap_or(false),
            grant_on_prompt: host.grant_on_prompt.unwrap_or(true),
            from_launcher: host.from_launcher.unwrap_or(true),
            activity: host.activity.as_deref().and_then(parse_screen),
            async_init: host.async_init.unwrap_or(false),
            continuation_delay: host
                .continuation_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_CONTINUATION_DELAY),
            delegated_result_code: host
                .delegated_result_code
                .and_then(|code| i32::try_from(code).ok())
                .unwrap_or(DelegatedResult::RESULT_OK),
        }
    }

    /// The request this simulated start delivers to the orchestrator.
    pub fn launch_request(&self) -> LaunchRequest {
        let origin = if self.from_launcher {
            LaunchRequest::launcher()
        } else {
            LaunchRequest::default()
                .with_action(ACTION_VIEW)
                .with_data("bootflow://open")
        };

        match &self.activity {
            Some(screen) => LaunchRequest::splash(Some(screen.clone()), Some(origin)),
            None => origin,
        }
    }
}

fn parse_screen(tag: &str) -> Option<Screen> {
    match tag.trim() {
        "" => None,
        "main" => Some(Screen::Main),
        "download" | "download-resources" => Some(Screen::DownloadResources),
        other => Some(Screen::Named(other.to_string())),
    }
}
