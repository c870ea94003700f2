use std::time::Duration;

use thermalarm_api::{PayloadError, Resource};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The device produced no payload: connection refused, reset, non-2xx status
    #[error("Transport error on {resource}: {message}")]
    Transport { resource: String, message: String },

    /// The device did not answer within the request timeout
    #[error("Request to {resource} timed out after {after:?}")]
    Timeout { resource: String, after: Duration },

    /// The device answered with a body that could not be interpreted
    #[error("Malformed payload from {resource}: {message}")]
    Decode { resource: String, message: String },

    /// User supplied limits that are not real numbers
    #[error("Invalid limits: {0}")]
    InvalidLimits(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The HTTP client could not be set up with the configured timeouts
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn transport<S: Into<String>>(resource: &Resource, message: S) -> Self {
        Self::Transport {
            resource: resource.path().to_string(),
            message: message.into(),
        }
    }

    pub fn timeout(resource: &Resource, after: Duration) -> Self {
        Self::Timeout {
            resource: resource.path().to_string(),
            after,
        }
    }

    pub fn decode(resource: &Resource, err: PayloadError) -> Self {
        Self::Decode {
            resource: resource.path().to_string(),
            message: err.to_string(),
        }
    }

    /// Whether the device was unreachable, as opposed to reachable but confusing.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::Timeout { .. })
    }
}

impl From<PayloadError> for Error {
    fn from(err: PayloadError) -> Self {
        Error::InvalidLimits(err.to_string())
    }
}
