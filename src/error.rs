//! Unified error types.

use thiserror::Error;

/// Developer-facing message attached to every user accessor failure.
pub const UNABLE_TO_GET_USER: &str = "Unable to get user";

/// Top-level crate error.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainFailure),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Why a single request did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response was received.
    Transport,
    /// A response arrived with a non-success status.
    Protocol { status: u16 },
}

/// A failed request, as produced by the request wrapper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestFailure {
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: FailureKind::Transport,
            // The outcome message must never be empty on failure.
            message: if message.is_empty() {
                "Transport error".to_string()
            } else {
                message
            },
        }
    }

    pub fn protocol(status: u16, reason: &str) -> Self {
        Self {
            kind: FailureKind::Protocol { status },
            message: format!("{} ({})", reason, status),
        }
    }
}

/// Classification carried through the accessor layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainFailureKind {
    Transport,
    Protocol { status: u16 },
    /// The server answered with success but the body could not be decoded.
    Decode,
}

impl From<FailureKind> for DomainFailureKind {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::Transport => DomainFailureKind::Transport,
            FailureKind::Protocol { status } => DomainFailureKind::Protocol { status },
        }
    }
}

/// Failure raised by the domain accessors.
///
/// `message` is meant for logs, `user_message` is what a page shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}: {user_message}")]
pub struct DomainFailure {
    pub kind: DomainFailureKind,
    pub message: String,
    pub user_message: String,
}

impl DomainFailure {
    pub fn decode(message: &str, detail: impl std::fmt::Display) -> Self {
        Self {
            kind: DomainFailureKind::Decode,
            message: message.to_string(),
            user_message: format!("Malformed response: {}", detail),
        }
    }

    /// Whether the page should tell the user about this failure.
    ///
    /// Decode failures only reach the logs.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self.kind, DomainFailureKind::Decode)
    }

    pub fn from_request(message: &str, failure: RequestFailure) -> Self {
        Self {
            kind: failure.kind.into(),
            message: message.to_string(),
            user_message: failure.message,
        }
    }
}
