// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! IR slot eligibility evaluation.
//!
//! A player is in violation iff they occupy an IR slot and their status is
//! not in the eligible set. Players in any other slot are never evaluated.

use crate::rules::EligibilityRuleSet;
use crate::types::{PlayerSlot, TeamRoster};
use crate::violation::Violation;

/// Finds every IR-slot occupant whose status is not eligible.
///
/// Output order follows team order, then player order within each team.
///
/// # Arguments
///
/// * `rosters` - Team rosters in snapshot order
/// * `rules` - The eligible status codes in force
///
/// # Returns
///
/// The violations found, possibly empty.
#[must_use]
pub fn evaluate(rosters: &[TeamRoster], rules: &EligibilityRuleSet) -> Vec<Violation> {
    rosters
        .iter()
        .flat_map(move |team| {
            team.ir_occupants()
                .filter(move |player| !rules.is_eligible(player.status()))
                .map(move |player| {
                    Violation::new(team, player, ineligibility_reason(player, rules))
                })
        })
        .collect()
}

/// Builds the explanation attached to a violation.
#[must_use]
fn ineligibility_reason(player: &PlayerSlot, rules: &EligibilityRuleSet) -> String {
    let rule: String = if rules.is_empty() {
        String::from("no statuses are currently eligible")
    } else {
        format!("eligible: {}", rules.code_list().join(", "))
    };

    let status: &str = player.status().trim();
    if status.is_empty() {
        format!(
            "Player {} has no injury status, which is not eligible for an IR slot ({rule})",
            player.name()
        )
    } else {
        format!(
            "Player {} has status '{status}' which is not eligible for an IR slot ({rule})",
            player.name()
        )
    }
}
