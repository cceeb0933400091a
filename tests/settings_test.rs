//! Configuration loading and logging setup
//!
//! Environment variables are process-global, so these tests run serially.

use checkin_portal::config::{Settings, StorageBackend};
use checkin_portal::utils::logging;
use serial_test::serial;

const ENV_VARS: [&str; 5] = [
    "ADMIN_UNAME",
    "ADMIN_PASS",
    "PORTAL_SERVER__PORT",
    "PORTAL_STORAGE__BACKEND",
    "PORTAL_LOGGING__LEVEL",
];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_admin_credentials_come_from_plain_env_vars() {
    clear_env();
    std::env::set_var("ADMIN_UNAME", "alice");
    std::env::set_var("ADMIN_PASS", "secret");

    let settings = Settings::new().expect("Failed to load settings");
    assert_eq!(settings.admin.username, "alice");
    assert_eq!(settings.admin.password, "secret");
    assert!(settings.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_prefixed_env_vars_override_nested_sections() {
    clear_env();
    std::env::set_var("ADMIN_UNAME", "alice");
    std::env::set_var("ADMIN_PASS", "secret");
    std::env::set_var("PORTAL_SERVER__PORT", "8080");
    std::env::set_var("PORTAL_STORAGE__BACKEND", "memory");
    std::env::set_var("PORTAL_LOGGING__LEVEL", "debug");

    let settings = Settings::new().expect("Failed to load settings");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.storage.backend, StorageBackend::Memory);
    assert_eq!(settings.logging.level, "debug");

    clear_env();
}

#[test]
#[serial]
fn test_missing_admin_credentials_fail_validation() {
    clear_env();

    let settings = Settings::new().expect("Defaults always load");
    assert!(settings.admin.username.is_empty());
    assert!(settings.validate().is_err());
}

#[test]
#[serial]
fn test_file_logging_writes_to_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut config = Settings::default().logging;
    config.directory = Some(dir.path().to_string_lossy().into_owned());

    let guard = logging::init_logging(&config).expect("Failed to init logging");
    assert!(guard.is_some());

    logging::log_checkin_action("m1", "evt_1", "recorded", "in_person");
    drop(guard);

    let written: Vec<_> = std::fs::read_dir(dir.path())
        .expect("Failed to read log dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(&config.file_prefix))
        .collect();
    assert!(!written.is_empty());

    let contents: String = written
        .iter()
        .filter_map(|entry| std::fs::read_to_string(entry.path()).ok())
        .collect();
    assert!(contents.contains("Check-in action performed"));
    assert!(contents.contains("in_person"));
}
