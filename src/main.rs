use std::process::ExitCode;

use anyhow::Context;
use bf_core::ports::AppDirsPort;
use bf_core::StartupOutcome;
use bf_platform::app_dirs::DirsAppDirsAdapter;
use bootflow::bootstrap::{self, BootflowConfig, HostSettings};
use bootflow::cli::Cli;
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let app_dirs = match DirsAppDirsAdapter::new().get_app_dirs() {
        Ok(dirs) => dirs,
        Err(err) => {
            eprintln!("Failed to resolve application directories: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber(Some(&app_dirs.logs_dir())) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    match run(cli, app_dirs).await {
        Ok(outcome) => {
            info!(?outcome, "startup finished");
            match outcome {
                StartupOutcome::Failed { .. } => ExitCode::FAILURE,
                _ => ExitCode::SUCCESS,
            }
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "startup aborted");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, app_dirs: bf_core::AppDirs) -> anyhow::Result<StartupOutcome> {
    let mut config = match &cli.config {
        Some(path) => bootstrap::load_config(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => BootflowConfig::with_system_defaults(app_dirs.app_data_root.clone()),
    };

    cli.apply_overrides(&mut config.host);
    if let Some(delay) = cli.init_delay_ms {
        config.startup.init_delay_ms = Some(delay);
    }

    let settings = HostSettings::resolve(&config.host);
    bootstrap::run_app(config, settings, app_dirs).await
}
