//! Error types for rill-core

use thiserror::Error;

/// Result type alias using rill-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the controller backend
#[derive(Error, Debug)]
pub enum Error {
    /// The request never completed (DNS, connect, TLS, timeout)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Controller rejected the request with HTTP {status}: {detail}")]
    Rejected { status: u16, detail: String },

    /// The response body was not the JSON record this client expects
    #[error("Could not decode controller response: {0}")]
    Decode(String),

    /// A configured base URL failed validation
    #[error("Invalid controller base URL: {0}")]
    InvalidBaseUrl(String),
}

impl Error {
    /// Whether trying again can plausibly succeed.
    ///
    /// Transport failures and server rejections are transient from the
    /// client's point of view. A URL that fails validation or a body that
    /// does not decode will fail the same way every time.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_errors_are_recoverable() {
        let error = Error::Rejected {
            status: 503,
            detail: "maintenance".to_string(),
        };
        assert!(error.is_recoverable());
    }

    #[test]
    fn config_and_decode_errors_are_not_recoverable() {
        assert!(!Error::InvalidBaseUrl("ftp://nope".to_string()).is_recoverable());
        assert!(!Error::Decode("expected a map".to_string()).is_recoverable());
    }

    #[test]
    fn rejected_message_includes_status_and_detail() {
        let error = Error::Rejected {
            status: 404,
            detail: "no such user".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Controller rejected the request with HTTP 404: no such user"
        );
    }
}
