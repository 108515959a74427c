/*!
 * Error types for the yartwai application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when calling the translation oracle
#[derive(Error, Debug)]
pub enum OracleError {
    /// Error when sending a request to the oracle fails
    #[error("Oracle request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing the oracle response fails
    #[error("Failed to parse oracle response: {0}")]
    ParseError(String),

    /// Error returned by the oracle endpoint itself
    #[error("Oracle responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the endpoint
        message: String,
    },

    /// Error establishing or maintaining a connection to the oracle
    #[error("Oracle connection error: {0}")]
    ConnectionError(String),

    /// The oracle returned an empty response for a non-empty chunk
    #[error("Oracle returned an empty response")]
    EmptyResponse,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the translation oracle
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Error from configuration loading or validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
