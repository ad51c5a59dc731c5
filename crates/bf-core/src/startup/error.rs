use crate::theme::ThemeId;

/// Invalid setup detected while constructing the orchestrator.
///
/// Programming-time invariant violation; construction is aborted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("attempt to apply unsupported theme: {theme}")]
    UnsupportedTheme { theme: ThemeId },
}

/// Native init could not access its storage.
///
/// Terminal for the orchestrator: the user can only exit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("native init failed to access storage: {reason}")]
pub struct StorageInitError {
    pub reason: String,
}

impl StorageInitError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for StorageInitError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}
