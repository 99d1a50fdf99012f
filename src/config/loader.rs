//! Configuration Loader
//!
//! Environment-aware configuration loading. Layers are merged by the `config`
//! crate, later layers winning:
//!
//! 1. [`BeehiveConfig::default`]
//! 2. `<dir>/beehive.toml` (optional)
//! 3. `<dir>/beehive.<environment>.toml` (optional)
//! 4. `BEEHIVE__*` environment variables

use config::{Config, Environment, File};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::BeehiveConfig;
use crate::error::Result;

const ENV_PREFIX: &str = "BEEHIVE";
const ENV_SEPARATOR: &str = "__";

/// Loaded configuration plus where it came from
#[derive(Debug)]
pub struct ConfigManager {
    config: BeehiveConfig,
    environment: String,
    config_directory: PathBuf,
}

impl ConfigManager {
    /// Load configuration with environment auto-detection
    pub fn load() -> Result<Arc<ConfigManager>> {
        Self::load_from_directory(None)
    }

    /// Load configuration from a specific directory
    pub fn load_from_directory(config_dir: Option<PathBuf>) -> Result<Arc<ConfigManager>> {
        let environment = Self::detect_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load configuration from a specific directory with explicit environment
    /// This is useful for testing without modifying global environment variables
    pub fn load_from_directory_with_env(
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> Result<Arc<ConfigManager>> {
        Self::load_with_sources(config_dir, environment, None)
    }

    /// Same as [`load_from_directory_with_env`](Self::load_from_directory_with_env)
    /// but reads overrides from `vars` instead of the process environment.
    pub fn load_with_env_vars(
        config_dir: Option<PathBuf>,
        environment: &str,
        vars: HashMap<String, String>,
    ) -> Result<Arc<ConfigManager>> {
        Self::load_with_sources(config_dir, environment, Some(vars))
    }

    fn load_with_sources(
        config_dir: Option<PathBuf>,
        environment: &str,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Arc<ConfigManager>> {
        let config_directory = config_dir.unwrap_or_else(Self::default_config_directory);

        debug!(
            "Loading configuration for environment '{}' from directory: {}",
            environment,
            config_directory.display()
        );

        let config = Self::load_and_merge_config(&config_directory, environment, vars)?;
        config.validate()?;

        debug!(
            environment = environment,
            handler_thread = %config.handler_thread.name,
            stack_size = ?config.handler_thread.stack_size,
            "Configuration loaded successfully"
        );

        Ok(Arc::new(ConfigManager {
            config,
            environment: environment.to_string(),
            config_directory,
        }))
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &BeehiveConfig {
        &self.config
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_directory(&self) -> &Path {
        &self.config_directory
    }

    /// Configuration as JSON, for diagnostics
    pub fn debug_config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    /// Detect current environment from environment variables
    pub fn detect_environment() -> String {
        env::var("BEEHIVE_ENV")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string())
            .to_lowercase()
    }

    fn default_config_directory() -> PathBuf {
        if let Ok(dir) = env::var("BEEHIVE_CONFIG_DIR") {
            return PathBuf::from(dir);
        }
        PathBuf::from("config")
    }

    fn load_and_merge_config(
        config_directory: &Path,
        environment: &str,
        vars: Option<HashMap<String, String>>,
    ) -> Result<BeehiveConfig> {
        let base_file = config_directory.join("beehive.toml");
        let env_file = config_directory.join(format!("beehive.{environment}.toml"));

        let environment_source = Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(vars);

        let merged = Config::builder()
            .add_source(Config::try_from(&BeehiveConfig::default())?)
            .add_source(File::from(base_file).required(false))
            .add_source(File::from(env_file).required(false))
            .add_source(environment_source)
            .build()?;

        Ok(merged.try_deserialize()?)
    }
}
