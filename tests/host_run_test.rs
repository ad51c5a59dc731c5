use std::path::PathBuf;
use std::time::Duration;

use bf_core::{AppDirs, DelegatedResult, DispatchMode, Screen, StartupConfig, StartupOutcome};
use bf_infra::FileStartupFlagsRepository;
use bootflow::bootstrap::{run_app, BootflowConfig, HostConfig, HostSettings};
use tempfile::TempDir;

const TEST_TIMEOUT: Duration = Duration::from_secs(10);

fn app_dirs(temp_dir: &TempDir) -> AppDirs {
    AppDirs {
        app_data_root: temp_dir.path().join("bootflow"),
        app_cache_root: temp_dir.path().join("cache"),
    }
}

fn config(temp_dir: &TempDir, host: HostConfig) -> BootflowConfig {
    let mut config = BootflowConfig::with_system_defaults(app_dirs(temp_dir).app_data_root);
    config.startup.init_delay_ms = Some(1);
    config.host = host;
    config
}

async fn run(temp_dir: &TempDir, config: BootflowConfig) -> anyhow::Result<StartupOutcome> {
    let settings = HostSettings::resolve(&config.host);
    tokio::time::timeout(TEST_TIMEOUT, run_app(config, settings, app_dirs(temp_dir)))
        .await
        .expect("startup should finish")
}

#[tokio::test]
async fn first_and_second_launch_reach_download_screen() {
    let temp_dir = TempDir::new().unwrap();

    let outcome = run(&temp_dir, config(&temp_dir, HostConfig::default()))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        StartupOutcome::Navigated {
            screen: Screen::DownloadResources,
            mode: DispatchMode::Direct,
        }
    );

    let flags = FileStartupFlagsRepository::with_defaults(app_dirs(&temp_dir).app_data_root)
        .load()
        .await
        .unwrap();
    assert!(flags.location_requested);
    assert!(flags.first_run_dialog_seen);
    assert_eq!(flags.launch_count, 1);
    assert!(app_dirs(&temp_dir).app_data_root.join("resources").is_dir());

    let outcome = run(&temp_dir, config(&temp_dir, HostConfig::default()))
        .await
        .unwrap();
    assert!(matches!(outcome, StartupOutcome::Navigated { .. }));
}

#[tokio::test]
async fn deep_link_returns_result_to_caller() {
    let temp_dir = TempDir::new().unwrap();
    let host = HostConfig {
        from_launcher: Some(false),
        ..HostConfig::default()
    };

    let outcome = run(&temp_dir, config(&temp_dir, host)).await.unwrap();

    assert_eq!(
        outcome,
        StartupOutcome::ResultPropagated {
            screen: Screen::DownloadResources,
            code: DelegatedResult::RESULT_OK,
        }
    );
}

#[tokio::test]
async fn override_from_launcher_opens_main_screen() {
    let temp_dir = TempDir::new().unwrap();
    let host = HostConfig {
        activity: Some("main".to_string()),
        location_granted: Some(true),
        async_init: Some(true),
        continuation_delay_ms: Some(5),
        ..HostConfig::default()
    };

    let outcome = run(&temp_dir, config(&temp_dir, host)).await.unwrap();

    assert_eq!(
        outcome,
        StartupOutcome::Navigated {
            screen: Screen::Main,
            mode: DispatchMode::Direct,
        }
    );
}

#[tokio::test]
async fn unsupported_theme_aborts_before_startup() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config(&temp_dir, HostConfig::default());
    config.startup.theme = "sepia".to_string();

    let err = run(&temp_dir, config).await.unwrap_err();

    assert!(format!("{err:#}").contains("unsupported theme"));
}

#[tokio::test]
async fn unusable_data_dir_ends_in_failure() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let mut config = config(&temp_dir, HostConfig::default());
    config.startup = StartupConfig {
        data_dir: PathBuf::from(&blocker).join("resources"),
        ..config.startup
    };

    let outcome = run(&temp_dir, config).await.unwrap();

    assert!(matches!(outcome, StartupOutcome::Failed { .. }));
}
