// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::rules::EligibilityRuleSet;
use crate::types::{StatusCode, TeamRoster};
use std::str::FromStr;

/// Last week of the fantasy season.
pub const MAX_WEEK: u32 = 18;

/// Parses a comma-separated list of eligible status codes.
///
/// Codes are matched case-insensitively against the known status table.
/// A blank string yields an empty rule set, which flags every IR occupant.
///
/// # Arguments
///
/// * `raw` - The configured list, e.g. `"IR,O,PUP"`
///
/// # Errors
///
/// Returns an error if:
/// - An entry between commas is blank
/// - An entry is not a known status code
pub fn parse_status_list(raw: &str) -> Result<EligibilityRuleSet, DomainError> {
    if raw.trim().is_empty() {
        return Ok(EligibilityRuleSet::default());
    }

    let mut codes: Vec<StatusCode> = Vec::new();
    for (position, entry) in raw.split(',').enumerate() {
        if entry.trim().is_empty() {
            return Err(DomainError::MalformedStatusList {
                input: raw.to_string(),
                position,
            });
        }
        codes.push(StatusCode::from_str(entry)?);
    }

    Ok(EligibilityRuleSet::new(codes))
}

/// Validates that a week number falls inside the season.
///
/// # Errors
///
/// Returns an error if the week is not between 1 and [`MAX_WEEK`].
pub const fn validate_week(week: u32) -> Result<(), DomainError> {
    if week == 0 || week > MAX_WEEK {
        return Err(DomainError::InvalidWeek {
            week,
            max: MAX_WEEK,
        });
    }
    Ok(())
}

/// Validates that every team in a snapshot carries an identity.
///
/// # Errors
///
/// Returns an error if a team has an empty identifier or name.
pub fn validate_team_rosters(rosters: &[TeamRoster]) -> Result<(), DomainError> {
    for (index, team) in rosters.iter().enumerate() {
        if team.team_id().trim().is_empty() {
            return Err(DomainError::InvalidTeam(format!(
                "team at position {index} has an empty team_id"
            )));
        }
        if team.team_name().trim().is_empty() {
            return Err(DomainError::InvalidTeam(format!(
                "team '{}' has an empty team_name",
                team.team_id()
            )));
        }
    }
    Ok(())
}
