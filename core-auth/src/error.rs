use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid service-account key: {0}")]
    InvalidKey(String),

    #[error("Failed to sign assertion: {0}")]
    Signing(String),

    #[error("Token endpoint returned {status}: {body}")]
    TokenEndpoint { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed token response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
