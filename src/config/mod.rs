//! # Beehive Configuration
//!
//! Settings for handler threads and logging, loaded in layers by
//! [`ConfigManager`]: built-in defaults, `config/beehive.toml`,
//! `config/beehive.<environment>.toml`, then `BEEHIVE__*` environment
//! variables (double underscore separates sections, e.g.
//! `BEEHIVE__HANDLER_THREAD__NAME=ingest`).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use beehive_mq::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let thread_name = &manager.config().handler_thread.name;
//! # Ok(())
//! # }
//! ```

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::error::{BeehiveError, Result};

pub use loader::ConfigManager;

/// Smallest stack we allow a handler thread to request
pub const MIN_STACK_SIZE: usize = 16 * 1024;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Root configuration structure mirroring beehive.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BeehiveConfig {
    /// Defaults for spawned handler threads
    pub handler_thread: HandlerThreadConfig,

    /// Structured logging settings
    pub logging: LoggingConfig,
}

impl BeehiveConfig {
    pub fn validate(&self) -> Result<()> {
        self.handler_thread.validate()?;
        self.logging.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HandlerThreadConfig {
    /// OS thread name
    pub name: String,
    /// Stack size in bytes; platform default when unset
    pub stack_size: Option<usize>,
}

impl Default for HandlerThreadConfig {
    fn default() -> Self {
        Self {
            name: "beehive-handler".to_string(),
            stack_size: None,
        }
    }
}

impl HandlerThreadConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(BeehiveError::Configuration(
                "handler_thread.name must not be empty".to_string(),
            ));
        }
        if self.name.contains('\0') {
            return Err(BeehiveError::Configuration(
                "handler_thread.name must not contain NUL bytes".to_string(),
            ));
        }
        if let Some(size) = self.stack_size {
            if size < MIN_STACK_SIZE {
                return Err(BeehiveError::Configuration(format!(
                    "handler_thread.stack_size {size} is below the minimum of {MIN_STACK_SIZE} bytes"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive; `None` derives it from the environment
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        match self.level.as_deref() {
            None => Ok(()),
            Some(level) if LOG_LEVELS.contains(&level.to_lowercase().as_str()) => Ok(()),
            Some(level) => Err(BeehiveError::Configuration(format!(
                "logging.level '{level}' is not one of {}",
                LOG_LEVELS.join(", ")
            ))),
        }
    }
}
