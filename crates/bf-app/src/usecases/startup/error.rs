use bf_core::{ConfigurationError, StorageInitError};

/// Errors produced by the startup orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("startup configuration invalid: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("startup halted: {0}")]
    StorageInit(#[from] StorageInitError),
    #[error("startup collaborator failed: {0}")]
    Collaborator(#[from] anyhow::Error),
}
