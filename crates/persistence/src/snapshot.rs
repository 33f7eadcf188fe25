// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use irwatch::LeagueContext;
use irwatch_domain::TeamRoster;
use serde::{Deserialize, Serialize};

/// Every team's roster at one point in time.
///
/// ```json
/// {
///   "league": { "name": "Sunday Funday", "season": "2025" },
///   "current_week": 6,
///   "teams": [
///     {
///       "team_id": "1",
///       "team_name": "Gridiron Gurus",
///       "manager": "Alex",
///       "players": [
///         { "player_id": "p1", "name": "Quinn", "status": "Q", "roster_slot": "IR" }
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<LeagueContext>,
    /// The league's current week, if the source reports one.
    #[serde(default, alias = "week", skip_serializing_if = "Option::is_none")]
    pub current_week: Option<u32>,
    pub teams: Vec<TeamRoster>,
}

impl RosterSnapshot {
    /// Parses a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns `MalformedSnapshot` if the document does not describe a snapshot.
    pub fn from_json(text: &str) -> Result<Self, PersistenceError> {
        serde_json::from_str(text).map_err(|err| PersistenceError::MalformedSnapshot(err.to_string()))
    }

    /// Chooses the week to check: the requested week, else the snapshot's own.
    ///
    /// # Errors
    ///
    /// Returns `MissingWeek` if neither is known.
    pub fn resolve_week(&self, requested: Option<u32>) -> Result<u32, PersistenceError> {
        requested
            .or(self.current_week)
            .ok_or(PersistenceError::MissingWeek)
    }
}
