//! Client-specific error types.
//!
//! This module provides the [`ClientError`] type for failures while
//! talking to the generation and settings service.

use thiserror::Error;

/// Errors that can occur while calling the remote service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The request never produced a usable HTTP response (connection
    /// refused, DNS failure, broken body, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("service returned HTTP {status}: {body}")]
    Http {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body, best effort.
        body: String,
    },

    /// The service processed the request but reported a failure.
    ///
    /// Carries the server-provided message when one was present.
    #[error("generation failed: {message}")]
    Rejected {
        /// Server-reported failure reason.
        message: String,
    },

    /// The service reported success but the payload was unusable.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ClientError {
    /// Creates a [`ClientError::Rejected`] from a server-reported
    /// message, substituting a placeholder when the server gave none.
    #[must_use]
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected {
            message: message.unwrap_or_else(|| "unknown error".to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_with_message() {
        let err = ClientError::rejected(Some("invalid spec".to_owned()));
        assert!(err.to_string().contains("invalid spec"));
    }

    #[test]
    fn test_rejected_without_message() {
        let err = ClientError::rejected(None);
        assert!(err.to_string().contains("unknown error"));
    }
}
