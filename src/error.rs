//! Error types for the beehive command channel.
//!
//! Handler verdicts (`HandlerResult::Error`) are control flow, not errors, and
//! never show up here. These variants cover thread lifecycle and setup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BeehiveError {
    #[error("Failed to spawn handler thread '{name}': {source}")]
    ThreadSpawn {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Handler thread '{name}' panicked: {message}")]
    ThreadPanicked { name: String, message: String },
    #[error("Handler thread '{0}' was already joined or detached")]
    ThreadReleased(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid message kind: {0}")]
    InvalidMessageKind(String),
}

impl BeehiveError {
    /// Build a `ThreadPanicked` from the payload returned by `JoinHandle::join`
    pub(crate) fn from_panic(name: &str, payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };

        BeehiveError::ThreadPanicked {
            name: name.to_string(),
            message,
        }
    }
}

impl From<config::ConfigError> for BeehiveError {
    fn from(err: config::ConfigError) -> Self {
        BeehiveError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BeehiveError>;
