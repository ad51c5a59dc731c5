pub mod event_bus;
mod handle;
mod startup_runtime;

pub use event_bus::startup_channel;
pub use handle::{StartupHandle, WeakStartupHandle};
pub use startup_runtime::StartupRuntime;
