// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::report::{ComplianceReport, LeagueContext, build_report};
use irwatch_domain::{
    EligibilityRuleSet, TeamRoster, Violation, evaluate, validate_team_rosters, validate_week,
};
use time::OffsetDateTime;
use tracing::{info, warn};

/// Evaluates a roster snapshot and aggregates the result into a report.
///
/// Given the same rosters and rules, the report differs between calls only
/// in `generated_at`.
///
/// # Arguments
///
/// * `week` - The week the snapshot describes
/// * `rosters` - Team rosters in snapshot order
/// * `rules` - The eligible status codes in force
/// * `league` - League identity, if the snapshot carried one
/// * `generated_at` - When the check ran
///
/// # Errors
///
/// Returns an error if the week is out of range or a team has no identity.
pub fn run_check(
    week: u32,
    rosters: &[TeamRoster],
    rules: &EligibilityRuleSet,
    league: Option<LeagueContext>,
    generated_at: OffsetDateTime,
) -> Result<ComplianceReport, CoreError> {
    validate_week(week)?;
    validate_team_rosters(rosters)?;

    info!(
        week,
        teams = rosters.len(),
        eligible = rules.len(),
        "Checking IR compliance"
    );
    if rules.is_empty() {
        warn!("No statuses are eligible; every IR occupant will be flagged");
    }

    let violations: Vec<Violation> = evaluate(rosters, rules);

    for violation in &violations {
        let status: &str = violation.player().status().trim();
        // Missing or unrecognized statuses are flagged by policy; surface them for review.
        if status.is_empty() || !violation.player().status_code().is_known() {
            warn!(
                team = violation.team_name(),
                player = violation.player().name(),
                status,
                "IR occupant has a missing or unrecognized status"
            );
        }
    }

    let report: ComplianceReport = build_report(week, rosters, &violations, generated_at)
        .with_eligible_statuses(rules)
        .with_league(league);

    info!(
        total_violations = report.total_violations,
        teams_with_violations = report.teams_with_violations,
        "IR compliance check complete"
    );

    Ok(report)
}
