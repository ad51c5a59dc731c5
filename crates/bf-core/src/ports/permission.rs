use async_trait::async_trait;

use crate::permission::{Permission, PermissionSnapshot};

#[async_trait]
pub trait PermissionPort: Send + Sync {
    fn is_granted(&self, permission: Permission) -> bool;

    /// Show the OS prompt. Returns once the prompt is up; the answer is delivered
    /// later as a permission-result event.
    async fn request(&self, permissions: &[Permission]) -> anyhow::Result<()>;

    /// Current location grants.
    fn location_snapshot(&self) -> PermissionSnapshot {
        PermissionSnapshot {
            coarse_location: self.is_granted(Permission::CoarseLocation),
            fine_location: self.is_granted(Permission::FineLocation),
        }
    }
}
