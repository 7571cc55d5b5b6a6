use thiserror::Error;

/// Errors surfaced by the converter.
///
/// The core performs no recovery: every error propagates to the caller and,
/// from the CLI, terminates the process.
#[derive(Debug, Error)]
pub enum Error {
    /// The API rejected the configured credentials.
    #[error("authentication failed ({status}): {message}")]
    Auth {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The API answered with a non-success status.
    #[error("request failed ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The request itself failed: connection, timeout, response decoding.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The document could not be serialized.
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
