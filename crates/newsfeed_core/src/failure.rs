use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Direct mode without an API key. Not retryable without reconfiguration.
    MissingCredential,
    NonJsonResponse,
    MalformedJson,
    /// Upstream answered with a non-2xx status.
    ApiError { status: u16 },
    /// Well-formed JSON without a usable `articles` array.
    InvalidShape,
    /// Transport failure before any response was obtained.
    NetworkFailure,
}

impl ErrorKind {
    pub fn is_retryable(self) -> bool {
        !matches!(self, ErrorKind::MissingCredential)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingCredential => write!(f, "missing credential"),
            ErrorKind::NonJsonResponse => write!(f, "non-json response"),
            ErrorKind::MalformedJson => write!(f, "malformed json"),
            ErrorKind::ApiError { status } => write!(f, "api error (status {status})"),
            ErrorKind::InvalidShape => write!(f, "invalid response shape"),
            ErrorKind::NetworkFailure => write!(f, "network failure"),
        }
    }
}

/// A classified fetch failure with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl FetchFailure {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
