//! Errors returned by the portal API client.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("{}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("response is missing `{0}`")]
    MissingData(&'static str),
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
