//! Error types for the Twilio Lookup bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when interacting with the Twilio Lookup API.
#[derive(Error, Debug)]
pub enum LookupApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Twilio returned an error document for the request
    #[error("HTTP {status} error: {message}")]
    Service {
        status: u16,
        /// Twilio error code (e.g. 20404), when the body carried one
        code: Option<u32>,
        message: String,
        /// The endpoint that was requested
        uri: String,
    },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl LookupApiError {
    /// The endpoint associated with a service error, if any.
    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::Service { uri, .. } => Some(uri),
            _ => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required setting is missing
    #[error("Missing required setting: {0}")]
    MissingVar(String),

    /// Setting has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that prevent the lookup plugin from activating.
#[derive(Error, Debug)]
pub enum ActivationError {
    /// No configuration was supplied at all
    #[error("TwilioLookup not configured - plugin not activating")]
    NotConfigured,

    /// Credentials were missing or blank
    #[error("Could not find TWILIO_ACCOUNT_SID or TWILIO_AUTH_TOKEN in plugin configuration")]
    MissingCredentials,

    /// Configuration could not be read
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience type alias for Results with LookupApiError
pub type LookupApiResult<T> = Result<T, LookupApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
