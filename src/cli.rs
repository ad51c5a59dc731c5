use std::path::PathBuf;

use clap::Parser;

use crate::bootstrap::config::HostConfig;

#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None)]
/// bootflow - runs one startup sequence headlessly and reports how it ended
pub struct Cli {
    /// TOML config file; system defaults are used when omitted
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Location permission is already granted
    #[clap(long)]
    pub location_granted: Option<bool>,

    /// Answer given to the location prompt
    #[clap(long)]
    pub grant_on_prompt: Option<bool>,

    /// Start as if launched from the launcher icon
    #[clap(long)]
    pub from_launcher: Option<bool>,

    /// Screen override carried by the launch request (main, download or any tag)
    #[clap(long)]
    pub activity: Option<String>,

    /// Engine completes init through an async continuation
    #[clap(long)]
    pub async_init: Option<bool>,

    /// Override the init delay, in milliseconds
    #[clap(long)]
    pub init_delay_ms: Option<u64>,
}

impl Cli {
    /// Command-line flags win over the config file.
    pub fn apply_overrides(&self, host: &mut HostConfig) {
        if let Some(value) = self.location_granted {
            host.location_granted = Some(value);
        }
        if let Some(value) = self.grant_on_prompt {
            host.grant_on_prompt = Some(value);
        }
        if let Some(value) = self.from_launcher {
            host.from_launcher = Some(value);
        }
        if let Some(value) = &self.activity {
            host.activity = Some(value.clone());
        }
        if let Some(value) = self.async_init {
            host.async_init = Some(value);
        }
    }
}
