// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while validating rule configuration or roster data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A status code was empty after trimming.
    EmptyStatusCode,
    /// A status code is not one the league reports.
    UnknownStatusCode(String),
    /// A comma-separated status list contains a blank entry.
    MalformedStatusList {
        /// The raw list as configured.
        input: String,
        /// Zero-based index of the blank entry.
        position: usize,
    },
    /// Week number is outside the fantasy season.
    InvalidWeek {
        /// The rejected week.
        week: u32,
        /// The last valid week.
        max: u32,
    },
    /// A team in the snapshot has no usable identity.
    InvalidTeam(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStatusCode => write!(f, "Status code cannot be empty"),
            Self::UnknownStatusCode(code) => write!(
                f,
                "Unknown status code '{code}'. Known codes: {}",
                crate::types::KNOWN_STATUS_CODES.join(", ")
            ),
            Self::MalformedStatusList { input, position } => write!(
                f,
                "Malformed status list '{input}': entry {position} is blank"
            ),
            Self::InvalidWeek { week, max } => {
                write!(f, "Invalid week: {week}. Must be between 1 and {max}")
            }
            Self::InvalidTeam(msg) => write!(f, "Invalid team: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
