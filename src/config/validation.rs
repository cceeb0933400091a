//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::{Settings, StorageBackend};
use crate::utils::errors::{PortalError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    if settings.storage.backend == StorageBackend::Postgres {
        validate_database_config(&settings.database)?;
    }
    validate_admin_credentials(&settings.admin)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate HTTP listener configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(PortalError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(PortalError::Config(
            "Server port must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(PortalError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(PortalError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(PortalError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate the expected admin credentials
fn validate_admin_credentials(config: &super::AdminCredentials) -> Result<()> {
    if config.username.is_empty() {
        return Err(PortalError::Config(format!(
            "Admin username is required (set {})",
            super::settings::ADMIN_USERNAME_VAR
        )));
    }

    if config.password.is_empty() {
        return Err(PortalError::Config(format!(
            "Admin password is required (set {})",
            super::settings::ADMIN_PASSWORD_VAR
        )));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PortalError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PortalError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    if config.directory.is_some() && config.file_prefix.is_empty() {
        return Err(PortalError::Config(
            "Log file prefix is required when a log directory is set".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdminCredentials;
    use assert_matches::assert_matches;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.admin = AdminCredentials::new("alice", "secret");
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_admin_credentials_rejected() {
        let mut settings = valid_settings();
        settings.admin.password.clear();
        assert_matches!(validate_settings(&settings), Err(PortalError::Config(msg)) if msg.contains("ADMIN_PASS"));

        let mut settings = valid_settings();
        settings.admin.username.clear();
        assert_matches!(validate_settings(&settings), Err(PortalError::Config(msg)) if msg.contains("ADMIN_UNAME"));
    }

    #[test]
    fn test_database_config_only_checked_for_postgres() {
        let mut settings = valid_settings();
        settings.database.url.clear();
        assert!(validate_settings(&settings).is_err());

        settings.storage.backend = StorageBackend::Memory;
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut settings = valid_settings();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_min_connections_bound() {
        let mut settings = valid_settings();
        settings.database.min_connections = 20;
        assert!(validate_settings(&settings).is_err());
    }
}
