//! Error types for the Google Drive provider

use thiserror::Error;

/// Google Drive provider errors
#[derive(Error, Debug)]
pub enum DriveError {
    /// API request returned an error status
    #[error("Google Drive API error (status {status_code}): {message}")]
    Api { status_code: u16, message: String },

    /// Request could not be sent or the response body could not be read
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse an API response
    #[error("Failed to parse API response: {0}")]
    Parse(String),

    /// Token acquisition failed
    #[error(transparent)]
    Auth(#[from] core_auth::AuthError),
}

/// Result type for Google Drive operations
pub type Result<T> = std::result::Result<T, DriveError>;
