//! Error types for the onboarding bot

use thiserror::Error;

use crate::api::RateLimit;

/// Result type alias for onboarding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for onboarding operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing environment variable
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    /// The issue title does not mention anyone
    #[error("No @username found in issue title: {title:?}")]
    NoUsername { title: String },

    /// Authentication with the platform failed
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The platform answered with an unexpected status
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a status (network, TLS, decoding)
    #[error("GitHub request failed: {0}")]
    Transport(String),

    /// The platform throttled the request
    #[error("GitHub rate limit exceeded: {0}")]
    RateLimited(RateLimit),

    /// Still throttled after every allowed attempt
    #[error("Gave up after {attempts} rate-limited attempts")]
    RetriesExhausted { attempts: u32 },
}
