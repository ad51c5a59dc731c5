//! Port interfaces for the application layer
//!
//! Ports define the contract between the startup orchestration (use cases)
//! and the platform it runs on. The orchestrator only ever talks to these traits,
//! so the whole startup flow can be driven without an OS harness.
//!
//! Inputs (facts the orchestrator reads): [`ThemePort`], [`PermissionPort`],
//! [`StartupFlagsPort`], [`NativeEnginePort`], [`LocationServicePort`].
//!
//! Outputs (effects the orchestrator requests): [`NavigatorPort`], [`DialogPort`],
//! [`InitTimerPort`].
//!
//! Re-entry from the native layer goes through [`InitContinuationPort`].
//! [`ClockPort`] and [`AppDirsPort`] serve the adapters and the host.

mod app_dirs;
mod clock;
mod dialog;
mod location;
mod native_engine;
mod navigator;
mod permission;
mod startup_flags;
mod theme;
mod timer;

pub use app_dirs::{AppDirsError, AppDirsPort};
pub use clock::ClockPort;
pub use dialog::DialogPort;
pub use location::LocationServicePort;
pub use native_engine::{InitContinuationPort, NativeEnginePort};
pub use navigator::NavigatorPort;
pub use permission::PermissionPort;
pub use startup_flags::StartupFlagsPort;
pub use theme::ThemePort;
pub use timer::InitTimerPort;

#[cfg(test)]
pub use theme::MockTheme;
