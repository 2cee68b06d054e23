use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Request failed to send or the remote answered with a non-success status.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Response body could not be decoded into the expected shape.
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    /// Response decoded but was missing a required part.
    #[error("Unexpected response from directory API: {0}")]
    UnexpectedResponse(String),
    /// Client was built with an invalid configuration.
    #[error("Invalid directory client configuration: {0}")]
    ConfigError(String),
}
