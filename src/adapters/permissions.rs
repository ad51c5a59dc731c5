use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bf_core::ports::PermissionPort;
use bf_core::{Permission, PermissionSnapshot, StartupEvent};
use bf_platform::WeakStartupHandle;
use tracing::info;

/// Permission database of the simulated device.
///
/// A prompt is answered immediately with the configured grant, and the answer
/// arrives through the mailbox like an OS callback would.
pub struct SimulatedPermissions {
    location_granted: AtomicBool,
    grant_on_prompt: bool,
    handle: WeakStartupHandle,
}

impl SimulatedPermissions {
    pub fn new(location_granted: bool, grant_on_prompt: bool, handle: WeakStartupHandle) -> Self {
        Self {
            location_granted: AtomicBool::new(location_granted),
            grant_on_prompt,
            handle,
        }
    }
}

#[async_trait]
impl PermissionPort for SimulatedPermissions {
    fn is_granted(&self, permission: Permission) -> bool {
        match permission {
            Permission::CoarseLocation | Permission::FineLocation => {
                self.location_granted.load(Ordering::SeqCst)
            }
        }
    }

    async fn request(&self, permissions: &[Permission]) -> anyhow::Result<()> {
        info!(?permissions, granted = self.grant_on_prompt, "permission prompt shown");
        if self.grant_on_prompt {
            self.location_granted.store(true, Ordering::SeqCst);
        }
        let grants = if self.grant_on_prompt {
            PermissionSnapshot::granted()
        } else {
            PermissionSnapshot::denied()
        };
        if !self.handle.send(StartupEvent::PermissionResult { grants }) {
            anyhow::bail!("startup mailbox closed before the prompt was answered");
        }
        Ok(())
    }
}
