//! # bf-platform
//!
//! Platform glue for bootflow: where the app keeps its files, and the task that
//! owns the startup orchestrator.

pub mod app_dirs;
pub mod runtime;

pub use runtime::{startup_channel, StartupHandle, StartupRuntime, WeakStartupHandle};
