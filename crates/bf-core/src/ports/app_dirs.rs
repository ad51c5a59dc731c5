use thiserror::Error;

use crate::app_dirs::AppDirs;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
    #[error("system cache directory is unavailable")]
    CacheDirUnavailable,
}

pub trait AppDirsPort: Send + Sync {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError>;
}
