//! Launch requests and the navigation decision taken once init is done.

mod launch_request;
mod pending;

pub use launch_request::{LaunchRequest, Screen, ACTION_MAIN, CATEGORY_LAUNCHER};
pub use pending::{DelegatedResult, DispatchMode, PendingNavigation, ScreenLaunch, TargetKind};
