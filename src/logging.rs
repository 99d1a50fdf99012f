//! # Structured Logging Module
//!
//! Environment-aware structured logging for handler threads. Events carry the
//! thread name and id so interleaved dispatch loops stay readable.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{ConfigManager, LoggingConfig};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific defaults
pub fn init_structured_logging() {
    init_structured_logging_with(&LoggingConfig::default());
}

/// Initialize structured logging from explicit settings.
///
/// Only the first call in a process has any effect. An already installed
/// global subscriber is left in place.
pub fn init_structured_logging_with(config: &LoggingConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = ConfigManager::detect_environment();
        let filter = build_filter(config, &environment);

        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_level(true);

        let installed = if config.json {
            tracing_subscriber::registry()
                .with(layer.json().with_filter(filter))
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(layer.with_ansi(true).with_filter(filter))
                .try_init()
        };

        if installed.is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            environment = %environment,
            json = config.json,
            "Structured logging initialized"
        );
    });
}

/// Default filter directive for an environment name
pub fn default_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

fn build_filter(config: &LoggingConfig, environment: &str) -> EnvFilter {
    if let Some(level) = &config.level {
        return EnvFilter::new(level.to_lowercase());
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(environment)))
}
