// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and IR eligibility rules.
//!
//! Everything in this crate is a pure function of its inputs: roster
//! snapshots are immutable once built, rule sets are fixed for a run, and
//! evaluation never performs I/O.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod eligibility;
mod error;
mod rules;
mod types;
mod validation;
mod violation;

#[cfg(test)]
mod tests;

pub use eligibility::evaluate;
pub use error::DomainError;
pub use rules::{DEFAULT_ELIGIBLE_STATUSES, EligibilityRuleSet};
pub use types::{KNOWN_STATUS_CODES, PlayerSlot, RosterSlot, StatusCode, TeamRoster};
pub use validation::{MAX_WEEK, parse_status_list, validate_team_rosters, validate_week};
pub use violation::Violation;
