// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use irwatch_domain::DomainError;
use irwatch_notify::{ChannelKind, DispatchError};
use irwatch_persistence::PersistenceError;
use thiserror::Error;

/// Exit code for configuration values that failed validation.
pub const EXIT_VALIDATION: u8 = 2;
/// Exit code for every other unrecoverable failure.
pub const EXIT_FAILURE: u8 = 1;

/// Failures that end a run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration value is malformed. Raised before any fetch.
    #[error("Invalid configuration: {0}")]
    Validation(String),
    /// The roster snapshot could not be obtained. No report is written.
    #[error("Could not fetch rosters: {0}")]
    Fetch(PersistenceError),
    /// Delivery was required but no channel is configured.
    #[error("Notification required but not deliverable: {0}")]
    Config(String),
    /// The selected channel failed. The report is already on disk.
    #[error("{channel} delivery failed: {source}")]
    Delivery {
        channel: ChannelKind,
        source: DispatchError,
    },
    /// The report could not be written.
    #[error("Could not save report: {0}")]
    Report(PersistenceError),
}

impl CliError {
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => EXIT_VALIDATION,
            Self::Fetch(_) | Self::Config(_) | Self::Delivery { .. } | Self::Report(_) => {
                EXIT_FAILURE
            }
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PersistenceError> for CliError {
    fn from(err: PersistenceError) -> Self {
        if err.is_fetch_error() {
            Self::Fetch(err)
        } else {
            Self::Report(err)
        }
    }
}
