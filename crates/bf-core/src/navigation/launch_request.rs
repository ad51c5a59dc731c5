use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Action carried by a plain launcher start.
pub const ACTION_MAIN: &str = "action.main";

/// Category marking a request as originating from the home screen launcher.
pub const CATEGORY_LAUNCHER: &str = "category.launcher";

/// Screen the orchestrator can hand off to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// First-run resource download screen (default target).
    DownloadResources,
    /// Main map screen.
    Main,
    /// Any other screen, identified by its registered tag.
    Named(String),
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::DownloadResources => write!(f, "download-resources"),
            Screen::Main => write!(f, "main"),
            Screen::Named(tag) => write!(f, "{tag}"),
        }
    }
}

/// Request that started the orchestrator.
///
/// `activity_to_start` and `initial_request` are the two extras the orchestrator
/// understands; everything else is forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
    pub action: Option<String>,
    pub categories: BTreeSet<String>,
    pub data: Option<String>,
    pub extras: BTreeMap<String, String>,
    pub activity_to_start: Option<Screen>,
    pub initial_request: Option<Box<LaunchRequest>>,
}

impl LaunchRequest {
    /// A plain start from the home screen launcher.
    pub fn launcher() -> Self {
        Self {
            action: Some(ACTION_MAIN.to_string()),
            ..Self::default()
        }
        .with_category(CATEGORY_LAUNCHER)
    }

    /// Request used to re-enter the orchestrator, optionally overriding the target
    /// screen and forwarding the request that should reach it.
    pub fn splash(
        activity_to_start: Option<Screen>,
        initial_request: Option<LaunchRequest>,
    ) -> Self {
        Self {
            activity_to_start,
            initial_request: initial_request.map(Box::new),
            ..Self::default()
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    pub fn is_from_launcher(&self) -> bool {
        self.has_category(CATEGORY_LAUNCHER)
    }

    /// Canonical byte form, used to compare forwarded payloads.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
