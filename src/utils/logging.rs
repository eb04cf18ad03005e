//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Wanderplan application.

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// Returns the worker guard for the non-blocking file writer; the caller
/// must keep it alive for the process lifetime or the rolling-file layer
/// stops flushing.
pub fn init_logging(config: &LoggingConfig) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "wanderplan.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log admin actions
pub fn log_admin_action(admin_id: i64, action: &str, target: Option<&str>) {
    warn!(
        admin_id = admin_id,
        action = action,
        target = target,
        "Admin action performed"
    );
}
