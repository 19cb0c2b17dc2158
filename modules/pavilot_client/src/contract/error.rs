//! Contract error types for the Pavilot client
//!
//! Configuration errors are raised before any remote call is attempted.
//! Remote errors are produced by the transport and passed through untouched.

use thiserror::Error;

/// Pavilot client errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PavilotError {
    /// Settings, endpoint or key is absent or blank
    #[error("{what} is not defined")]
    MissingConfiguration {
        /// Name of the missing piece (Settings, ApiEndpoint, ApiKey)
        what: String,
    },

    /// Endpoint is present but not a well-formed absolute URL
    #[error("{what} setting is not valid: {reason}")]
    InvalidConfiguration {
        /// Name of the offending setting
        what: String,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration source exists but could not be extracted
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Remote responded with a non-success status
    #[error("Pavilot API returned {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response body did not match the expected record
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl PavilotError {
    pub(crate) fn missing(what: impl Into<String>) -> Self {
        Self::MissingConfiguration { what: what.into() }
    }

    pub(crate) fn invalid(what: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            what: what.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error came from settings validation rather than the remote
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingConfiguration { .. } | Self::InvalidConfiguration { .. }
        )
    }
}
