//! Host-side adapters for the ports the headless binary has to play itself.

mod dialog;
mod navigator;
mod permissions;
mod theme;

pub use dialog::LoggingDialog;
pub use navigator::LoggingNavigator;
pub use permissions::SimulatedPermissions;
pub use theme::ConfigThemeAdapter;
