// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::StatusCode;
use std::collections::BTreeSet;

/// Statuses allowed in an IR slot when nothing else is configured.
pub const DEFAULT_ELIGIBLE_STATUSES: &[&str] =
    &["IR", "IR-R", "O", "PUP", "PUP-R", "NFI", "NFI-R", "SUSP", "NA"];

/// The set of status codes permitted to occupy an IR slot.
///
/// Loaded once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EligibilityRuleSet {
    eligible_statuses: BTreeSet<StatusCode>,
}

impl EligibilityRuleSet {
    /// Creates a rule set from already-normalized codes.
    #[must_use]
    pub fn new(codes: impl IntoIterator<Item = StatusCode>) -> Self {
        Self {
            eligible_statuses: codes.into_iter().collect(),
        }
    }

    /// The league's standard IR eligibility table.
    #[must_use]
    pub fn league_default() -> Self {
        Self::new(DEFAULT_ELIGIBLE_STATUSES.iter().map(|code| StatusCode::new(code)))
    }

    /// Returns whether a raw player status may occupy an IR slot.
    ///
    /// Comparison is case-insensitive. Blank, `UNKNOWN` and `ACTIVE` are never
    /// eligible.
    #[must_use]
    pub fn is_eligible(&self, status: &str) -> bool {
        let code: StatusCode = StatusCode::new(status);
        if code.is_never_eligible() {
            return false;
        }
        self.eligible_statuses.contains(&code)
    }

    /// Iterates the eligible codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &StatusCode> {
        self.eligible_statuses.iter()
    }

    /// Returns the eligible codes as plain strings.
    #[must_use]
    pub fn code_list(&self) -> Vec<String> {
        self.codes().map(|code| code.value().to_string()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.eligible_statuses.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.eligible_statuses.len()
    }
}
