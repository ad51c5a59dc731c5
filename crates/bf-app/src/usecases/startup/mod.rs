mod error;
mod orchestrator;

pub use error::StartupError;
pub use orchestrator::{StartupOrchestrator, StartupOrchestratorDeps, DEFAULT_INIT_DELAY};
