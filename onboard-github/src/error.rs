//! Error types for GitHub operations

use onboard_core::RateLimit;
use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub API error
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// Authentication error
    #[error("GitHub authentication error: {0}")]
    Auth(String),

    /// Unexpected response status
    #[error("GitHub returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Rate limit exceeded
    #[error("GitHub rate limit exceeded: {0}")]
    RateLimited(RateLimit),
}

impl From<Error> for onboard_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Api(octocrab::Error::GitHub { source, .. }) => onboard_core::Error::Api {
                status: source.status_code.as_u16(),
                message: source.message,
            },
            Error::Api(other) => onboard_core::Error::Transport(other.to_string()),
            Error::Auth(message) => onboard_core::Error::Auth(message),
            Error::Status { status, message } => onboard_core::Error::Api { status, message },
            Error::RateLimited(limit) => onboard_core::Error::RateLimited(limit),
        }
    }
}
