//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// The puzzle page did not contain a recognisable title
    #[error("No puzzle title found in the page")]
    MissingTitle,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
