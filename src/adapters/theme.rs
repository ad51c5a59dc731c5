use std::sync::Mutex;

use bf_core::ports::ThemePort;
use bf_core::{SplashTheme, ThemeId};
use tracing::info;

const DEFAULT_THEMES: &[&str] = &["", "default", "light"];
const NIGHT_THEMES: &[&str] = &["night", "dark"];

/// Theme taken from the `[ui] theme` config key.
pub struct ConfigThemeAdapter {
    current: ThemeId,
    applied: Mutex<Option<SplashTheme>>,
}

impl ConfigThemeAdapter {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            current: ThemeId::new(theme),
            applied: Mutex::new(None),
        }
    }

    pub fn applied(&self) -> Option<SplashTheme> {
        self.applied.lock().map(|guard| *guard).unwrap_or(None)
    }
}

impl ThemePort for ConfigThemeAdapter {
    fn current_theme(&self) -> ThemeId {
        self.current.clone()
    }

    fn is_default_theme(&self, theme: &ThemeId) -> bool {
        DEFAULT_THEMES.contains(&theme.as_str())
    }

    fn is_night_theme(&self, theme: &ThemeId) -> bool {
        NIGHT_THEMES.contains(&theme.as_str())
    }

    fn apply_splash_theme(&self, theme: SplashTheme) {
        info!(?theme, "splash theme applied");
        if let Ok(mut applied) = self.applied.lock() {
            *applied = Some(theme);
        }
    }
}
