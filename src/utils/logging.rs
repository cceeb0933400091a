//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the portal.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::{PortalError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| PortalError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a check-in submission outcome
pub fn log_checkin_action(member_id: &str, event_id: &str, action: &str, mode: &str) {
    info!(
        member_id = member_id,
        event_id = event_id,
        action = action,
        mode = mode,
        "Check-in action performed"
    );
}

/// Log admin actions
pub fn log_admin_action(action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log an access-control decision for a request path
pub fn log_access_decision(path: &str, decision: &str) {
    debug!(path = path, decision = decision, "Access control decision");
}

/// Log a rejected admin credential attempt
pub fn log_rejected_credentials(path: &str, username: Option<&str>) {
    warn!(
        path = path,
        username = username,
        "Admin credentials rejected"
    );
}
