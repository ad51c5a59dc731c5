use crate::theme::{SplashTheme, ThemeId};

pub trait ThemePort: Send + Sync {
    /// Theme currently selected by the user.
    fn current_theme(&self) -> ThemeId;
    fn is_default_theme(&self, theme: &ThemeId) -> bool;
    fn is_night_theme(&self, theme: &ThemeId) -> bool;
    /// Switch the startup screen to the given splash variant.
    fn apply_splash_theme(&self, theme: SplashTheme);
}

#[cfg(test)]
mockall::mock! {
    pub Theme {}

    impl ThemePort for Theme {
        fn current_theme(&self) -> ThemeId;
        fn is_default_theme(&self, theme: &ThemeId) -> bool;
        fn is_night_theme(&self, theme: &ThemeId) -> bool;
        fn apply_splash_theme(&self, theme: SplashTheme);
    }
}
