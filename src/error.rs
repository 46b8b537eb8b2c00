use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors that can occur while exporting the Loon rule index
#[derive(Error, Debug)]
pub enum LoonError {
    /// Network or HTTP status failure while retrieving the README
    #[error("Failed to fetch {url}: {source}")]
    FetchError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// README body is not valid UTF-8
    #[error("README from {url} is not valid UTF-8: {source}")]
    DecodeError {
        url: String,
        #[source]
        source: FromUtf8Error,
    },

    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    ClientError(#[source] reqwest::Error),

    /// Failed to read a local README
    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file
    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize entries to JSON
    #[error("Serialization failed: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
