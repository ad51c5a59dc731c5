//! Runtime permissions the startup flow cares about.

use serde::{Deserialize, Serialize};

/// Location permissions requested on first start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    CoarseLocation,
    FineLocation,
}

impl Permission {
    /// Both location permissions, in the order they are requested.
    pub const LOCATION: [Permission; 2] = [Permission::CoarseLocation, Permission::FineLocation];
}

/// Point-in-time view of the location grants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSnapshot {
    pub coarse_location: bool,
    pub fine_location: bool,
}

impl PermissionSnapshot {
    pub const fn denied() -> Self {
        Self {
            coarse_location: false,
            fine_location: false,
        }
    }

    pub const fn granted() -> Self {
        Self {
            coarse_location: true,
            fine_location: true,
        }
    }

    /// True when either location grant is present.
    pub fn any_location(&self) -> bool {
        self.coarse_location || self.fine_location
    }
}
