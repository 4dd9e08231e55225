// errors.rs
use thiserror::Error;

/// Errors originating from the HTTP host (routing, bad input, rendering).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

/// The one failure the directory can report: either dataset could not be
/// fetched or did not parse. Which one failed is only kept for the log.
#[derive(Debug, Clone, Error)]
#[error("failed to load directory data: {reason}")]
pub struct LoadFailure {
    reason: String,
}

impl LoadFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid data source {value:?}: {source}")]
    DataSource {
        value: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
