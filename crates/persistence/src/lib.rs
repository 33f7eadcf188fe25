// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for irwatch.
//!
//! This crate owns everything that crosses the process boundary as data:
//!
//! - **Roster snapshots** are loaded from a JSON file or fetched from an HTTP
//!   endpoint through a [`RosterSource`]. The source is a thin loader; the
//!   league's own API client lives outside this workspace and publishes the
//!   snapshot format described by [`RosterSnapshot`].
//! - **Compliance reports** are written by the [`ReportStore`] as one
//!   uniquely-named JSON file per run. A stored report reads back into an
//!   identical value.
//!
//! ## Failure Semantics
//!
//! A fetch either returns a complete snapshot or fails. No partial snapshot
//! is ever handed to the evaluator, and nothing is written when a fetch fails.

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod snapshot;
mod source;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use snapshot::RosterSnapshot;
pub use source::RosterSource;
pub use store::{REPORT_FILE_PREFIX, ReportStore};
