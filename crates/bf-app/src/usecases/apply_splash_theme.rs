use std::sync::Arc;

use bf_core::{ports::ThemePort, ConfigurationError, SplashTheme};
use tracing::debug;

/// Switch the startup screen to the splash variant of the user's theme.
pub struct ApplySplashTheme {
    themes: Arc<dyn ThemePort>,
}

impl ApplySplashTheme {
    pub fn new(themes: Arc<dyn ThemePort>) -> Self {
        Self { themes }
    }

    pub fn execute(&self) -> Result<SplashTheme, ConfigurationError> {
        let theme = self.themes.current_theme();
        let splash = SplashTheme::select(&theme, self.themes.as_ref())?;
        self.themes.apply_splash_theme(splash);
        debug!(theme = %theme, splash = ?splash, "splash theme applied");
        Ok(splash)
    }
}
