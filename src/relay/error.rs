use thiserror::Error;

/// Ways an inbound relay request can be malformed. The display text
/// is what the caller sees.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Messages array required")]
    MissingMessages,
    #[error("Invalid message in transcript")]
    InvalidMessage,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequest),

    #[error("API key not configured")]
    Configuration,

    /// The provider answered with an error object. The message is
    /// passed through to the caller verbatim.
    #[error("{0}")]
    Provider(String),

    #[error("provider request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("provider request failed: {0}")]
    Internal(#[source] reqwest::Error),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Internal(err)
        }
    }
}
