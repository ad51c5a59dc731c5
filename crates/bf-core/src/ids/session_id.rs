use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier of one orchestrator lifetime, attached to every startup span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StartupSessionId(String);

impl StartupSessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StartupSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for StartupSessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StartupSessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
