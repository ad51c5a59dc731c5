use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bf_core::ports::LocationServicePort;
use tracing::info;

/// Location service that only tracks whether it was started.
#[derive(Debug, Default)]
pub struct InMemoryLocationService {
    active: AtomicBool,
    first_run: AtomicBool,
}

impl InMemoryLocationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entered_first_run(&self) -> bool {
        self.first_run.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationServicePort for InMemoryLocationService {
    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    async fn start(&self) -> anyhow::Result<()> {
        if !self.active.swap(true, Ordering::SeqCst) {
            info!("location tracking started");
        }
        Ok(())
    }

    fn on_entered_first_run(&self) {
        self.first_run.store(true, Ordering::SeqCst);
    }
}
