use crate::navigation::{DispatchMode, Screen};
use crate::startup::{StartupPhase, StorageInitError};

/// How an orchestrator lifetime ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupOutcome {
    /// Target screen started and the startup screen finished.
    Navigated { screen: Screen, mode: DispatchMode },
    /// A delegated screen returned and its result was handed back.
    ResultPropagated { screen: Screen, code: i32 },
    /// Startup halted on a storage failure.
    Failed { error: StorageInitError },
    /// Torn down in the given phase.
    Destroyed { phase: StartupPhase },
}
