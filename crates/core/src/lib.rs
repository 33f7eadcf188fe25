// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod check;
mod error;
mod policy;
mod report;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use check::run_check;
pub use error::CoreError;
pub use policy::{DeliveryDecision, delivery_decision};
pub use report::{
    ComplianceReport, CompliantTeam, LeagueContext, ViolationRecord, build_report,
};
