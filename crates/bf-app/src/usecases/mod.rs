pub mod apply_splash_theme;
pub mod bootstrap_first_run_location;
pub mod dispatch_navigation;
pub mod startup;

pub use apply_splash_theme::ApplySplashTheme;
pub use bootstrap_first_run_location::BootstrapFirstRunLocation;
pub use dispatch_navigation::{DispatchNavigation, NavigationDispatched};
pub use startup::{
    StartupError, StartupOrchestrator, StartupOrchestratorDeps, DEFAULT_INIT_DELAY,
};
