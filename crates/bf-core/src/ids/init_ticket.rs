use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Ticket identifying one scheduled init task.
///
/// Every schedule issues a fresh ticket; a timer fire carrying any other ticket
/// is stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InitTicket(u64);

impl InitTicket {
    pub const fn first() -> Self {
        Self(1)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for InitTicket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "init#{}", self.0)
    }
}

impl From<u64> for InitTicket {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
