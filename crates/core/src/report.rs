// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The compliance report produced by one run.
//!
//! The report is the persisted artifact: its serialized form must read back
//! into an identical value.

use irwatch_domain::{EligibilityRuleSet, TeamRoster, Violation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::OffsetDateTime;

/// League identity reported alongside the roster snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueContext {
    /// The league's display name.
    pub name: String,
    /// The season year, e.g. `2025`.
    pub season: String,
}

/// A violation flattened for persistence and messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub team_id: String,
    pub team_name: String,
    pub manager: String,
    pub player_id: String,
    pub player_name: String,
    pub current_status: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_note: Option<String>,
}

impl From<&Violation> for ViolationRecord {
    fn from(violation: &Violation) -> Self {
        let player = violation.player();
        Self {
            team_id: violation.team_id().to_string(),
            team_name: violation.team_name().to_string(),
            manager: violation.manager_name().to_string(),
            player_id: player.player_id().to_string(),
            player_name: player.name().to_string(),
            current_status: player.status().to_string(),
            reason: violation.reason().to_string(),
            injury_note: player.injury_note().map(str::to_string),
        }
    }
}

/// A team with no IR violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompliantTeam {
    pub team_id: String,
    pub team_name: String,
    pub manager: String,
    /// Number of players legitimately occupying IR slots.
    pub ir_players_count: usize,
}

/// Aggregate result of one compliance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub week: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub teams_checked: usize,
    pub teams_with_violations: usize,
    pub total_violations: usize,
    /// Violations in team order, then player order.
    pub violations: Vec<ViolationRecord>,
    #[serde(default)]
    pub compliant_teams: Vec<CompliantTeam>,
    #[serde(default)]
    pub eligible_statuses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<LeagueContext>,
}

impl ComplianceReport {
    /// Returns whether no violations were found.
    #[must_use]
    pub const fn is_compliant(&self) -> bool {
        self.total_violations == 0
    }

    /// Records the eligible statuses the report was evaluated against.
    #[must_use]
    pub fn with_eligible_statuses(mut self, rules: &EligibilityRuleSet) -> Self {
        self.eligible_statuses = rules.code_list();
        self
    }

    /// Attaches the league identity, if known.
    #[must_use]
    pub fn with_league(mut self, league: Option<LeagueContext>) -> Self {
        self.league = league;
        self
    }

    /// Groups violations by team, preserving report order.
    #[must_use]
    pub fn violations_by_team(&self) -> Vec<(&str, Vec<&ViolationRecord>)> {
        let mut groups: Vec<(&str, Vec<&ViolationRecord>)> = Vec::new();
        for record in &self.violations {
            match groups.iter_mut().find(|(team_id, _)| *team_id == record.team_id) {
                Some((_, records)) => records.push(record),
                None => groups.push((record.team_id.as_str(), vec![record])),
            }
        }
        groups
    }
}

/// Aggregates violations into a report.
///
/// This is pure aggregation:
/// - `teams_checked` counts distinct team ids in `rosters`
/// - `teams_with_violations` counts distinct team ids in `violations`
/// - `total_violations` is the number of violations
///
/// # Arguments
///
/// * `week` - The week the snapshot describes
/// * `rosters` - Every roster that was evaluated
/// * `violations` - The evaluator's output for those rosters
/// * `generated_at` - When the check ran
#[must_use]
pub fn build_report(
    week: u32,
    rosters: &[TeamRoster],
    violations: &[Violation],
    generated_at: OffsetDateTime,
) -> ComplianceReport {
    let teams_checked: usize = rosters
        .iter()
        .map(TeamRoster::team_id)
        .collect::<HashSet<&str>>()
        .len();

    let violating_teams: HashSet<&str> = violations.iter().map(Violation::team_id).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let compliant_teams: Vec<CompliantTeam> = rosters
        .iter()
        .filter(|team| !violating_teams.contains(team.team_id()))
        .filter(|team| seen.insert(team.team_id()))
        .map(|team| CompliantTeam {
            team_id: team.team_id().to_string(),
            team_name: team.team_name().to_string(),
            manager: team.manager_name().to_string(),
            ir_players_count: team.ir_occupants().count(),
        })
        .collect();

    ComplianceReport {
        week,
        generated_at,
        teams_checked,
        teams_with_violations: violating_teams.len(),
        total_violations: violations.len(),
        violations: violations.iter().map(ViolationRecord::from).collect(),
        compliant_teams,
        eligible_statuses: Vec::new(),
        league: None,
    }
}
