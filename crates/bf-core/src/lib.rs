//! # bf-core
//!
//! Core domain models and the startup state machine for bootflow.
//!
//! This crate contains pure startup logic without any infrastructure dependencies.
//! Everything that touches the operating system (permission prompts, screens,
//! dialogs, the native engine) is reached through [`ports`].

pub mod app_dirs;
pub mod config;
pub mod flags;
pub mod ids;
pub mod navigation;
pub mod permission;
pub mod ports;
pub mod startup;
pub mod theme;

// Re-export commonly used types at the crate root
pub use app_dirs::AppDirs;
pub use config::StartupConfig;
pub use flags::StartupFlags;
pub use ids::{InitTicket, StartupSessionId};
pub use navigation::{
    DelegatedResult, DispatchMode, LaunchRequest, PendingNavigation, Screen, ScreenLaunch,
    TargetKind,
};
pub use permission::{Permission, PermissionSnapshot};
pub use startup::{
    ConfigurationError, FatalDialog, InitOutcome, StartupAction, StartupEvent, StartupOutcome,
    StartupPhase, StartupState, StartupStateMachine, StorageInitError,
};
pub use theme::{SplashTheme, ThemeId};
