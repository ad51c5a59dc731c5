pub mod config;
pub mod run;
pub mod settings;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, BootflowConfig, HostConfig};
pub use run::run_app;
pub use settings::HostSettings;
