use std::sync::Arc;

use anyhow::Result;
use bf_core::ports::{LocationServicePort, PermissionPort};
use tracing::{debug, info};

/// Start location tracking on the first-ever launch, when a location grant exists.
pub struct BootstrapFirstRunLocation {
    permissions: Arc<dyn PermissionPort>,
    location: Arc<dyn LocationServicePort>,
}

impl BootstrapFirstRunLocation {
    pub fn new(
        permissions: Arc<dyn PermissionPort>,
        location: Arc<dyn LocationServicePort>,
    ) -> Self {
        Self {
            permissions,
            location,
        }
    }

    /// Returns whether tracking was started by this call.
    pub async fn execute(&self) -> Result<bool> {
        if !self.permissions.location_snapshot().any_location() {
            debug!("first run without location grant, tracking not started");
            return Ok(false);
        }

        self.location.on_entered_first_run();
        if self.location.is_active() {
            return Ok(false);
        }

        self.location.start().await?;
        info!("location tracking started for first run");
        Ok(true)
    }
}
