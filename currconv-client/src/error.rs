//! Error types for client operations.

use currconv_types::RequestError;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request was rejected before anything was sent.
    #[error(transparent)]
    Validation(#[from] RequestError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("HTTP error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-200 status.
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of a remote error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error type for loading a [`Config`](crate::Config) from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
}
