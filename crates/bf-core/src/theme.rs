//! Splash theme selection.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ports::ThemePort;
use crate::startup::ConfigurationError;

/// Opaque identifier of the user's current UI theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeId(String);

impl ThemeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ThemeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ThemeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Splash screen variant matching the user's theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplashTheme {
    Default,
    Night,
}

impl SplashTheme {
    /// Pick the splash variant for `theme`.
    ///
    /// Only the default and night themes have a splash variant; anything else is a
    /// configuration error and must abort construction.
    pub fn select(theme: &ThemeId, themes: &dyn ThemePort) -> Result<Self, ConfigurationError> {
        if themes.is_default_theme(theme) {
            Ok(SplashTheme::Default)
        } else if themes.is_night_theme(theme) {
            Ok(SplashTheme::Night)
        } else {
            Err(ConfigurationError::UnsupportedTheme {
                theme: theme.clone(),
            })
        }
    }
}
