// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while loading snapshots or storing reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The roster source could not be reached or read.
    SourceUnreachable(String),
    /// The roster endpoint answered with a non-success status.
    SourceStatus { status: u16 },
    /// The roster source answered, but not with a usable snapshot.
    MalformedSnapshot(String),
    /// No week was requested and the snapshot does not report one.
    MissingWeek,
    /// A report file could not be written or read.
    Io(String),
    /// Serialization/deserialization error.
    SerializationError(String),
}

impl PersistenceError {
    /// Returns whether this error happened while obtaining the roster snapshot.
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::SourceUnreachable(_)
                | Self::SourceStatus { .. }
                | Self::MalformedSnapshot(_)
                | Self::MissingWeek
        )
    }
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceUnreachable(msg) => write!(f, "Roster source unreachable: {msg}"),
            Self::SourceStatus { status } => {
                write!(f, "Roster source answered with HTTP {status}")
            }
            Self::MalformedSnapshot(msg) => write!(f, "Malformed roster snapshot: {msg}"),
            Self::MissingWeek => write!(
                f,
                "No week requested and the roster snapshot does not report a current week"
            ),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for PersistenceError {
    fn from(err: reqwest::Error) -> Self {
        let err: reqwest::Error = err.without_url();
        if err.is_decode() {
            Self::MalformedSnapshot(err.to_string())
        } else {
            Self::SourceUnreachable(err.to_string())
        }
    }
}
