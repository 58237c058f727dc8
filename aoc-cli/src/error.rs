//! Error types for the CLI

use crate::exit_codes;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Arguments that parse but make no sense together
    #[error("{0}")]
    Usage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Loading, resolving or running a solution failed
    #[error(transparent)]
    Harness(#[from] aoc_harness::HarnessError),

    /// Creating a solution module failed
    #[error(transparent)]
    Scaffold(#[from] aoc_harness::ScaffoldError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_harness::RegistrationError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        exit_codes::ERROR
    }
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache directory creation failed
    #[error("Cache directory creation failed: {0}")]
    DirCreation(String),
}
