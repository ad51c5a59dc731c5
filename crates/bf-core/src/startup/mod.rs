//! Startup domain module.
//!
//! This module defines the startup orchestration state machine types.

mod action;
mod error;
mod event;
mod outcome;
mod state;
pub mod state_machine;

pub use action::{FatalDialog, StartupAction};
pub use error::{ConfigurationError, StorageInitError};
pub use event::{InitOutcome, StartupEvent};
pub use outcome::StartupOutcome;
pub use state::{StartupPhase, StartupState};
pub use state_machine::StartupStateMachine;
