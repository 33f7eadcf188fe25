// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Classification of a delivery failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchErrorKind {
    /// The endpoint could not be reached.
    Network,
    /// The request exceeded the configured timeout.
    Timeout,
    /// The endpoint rejected the credentials.
    Auth,
    /// The endpoint answered with a non-success status.
    Rejected { status: u16 },
    /// The endpoint answered successfully but not in the expected shape.
    MalformedResponse,
    /// The notification file could not be written.
    Io,
    /// The payload could not be serialized.
    Serialization,
    /// No channel was available to deliver through.
    Unconfigured,
}

impl std::fmt::Display for DispatchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => write!(f, "network error"),
            Self::Timeout => write!(f, "timed out"),
            Self::Auth => write!(f, "authentication rejected"),
            Self::Rejected { status } => write!(f, "rejected with HTTP {status}"),
            Self::MalformedResponse => write!(f, "malformed response"),
            Self::Io => write!(f, "I/O error"),
            Self::Serialization => write!(f, "serialization error"),
            Self::Unconfigured => write!(f, "no channel configured"),
        }
    }
}

/// A delivery failure reported back to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct DispatchError {
    pub kind: DispatchErrorKind,
    pub message: String,
}

impl DispatchError {
    #[must_use]
    pub fn new(kind: DispatchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        let kind: DispatchErrorKind = if err.is_timeout() {
            DispatchErrorKind::Timeout
        } else if err.is_decode() {
            DispatchErrorKind::MalformedResponse
        } else {
            DispatchErrorKind::Network
        };
        // Webhook URLs embed their secret, keep them out of messages.
        Self::new(kind, err.without_url().to_string())
    }
}

impl From<std::io::Error> for DispatchError {
    fn from(err: std::io::Error) -> Self {
        Self::new(DispatchErrorKind::Io, err.to_string())
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(DispatchErrorKind::Serialization, err.to_string())
    }
}
