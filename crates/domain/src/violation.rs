// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{PlayerSlot, TeamRoster};
use serde::{Deserialize, Serialize};

/// A single IR-slot occupant whose status is not eligible.
///
/// Violations are regenerated on every run and never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    team_id: String,
    team_name: String,
    manager_name: String,
    player: PlayerSlot,
    reason: String,
}

impl Violation {
    /// Creates a violation owned by `team`.
    #[must_use]
    pub fn new(team: &TeamRoster, player: &PlayerSlot, reason: String) -> Self {
        Self {
            team_id: team.team_id().to_string(),
            team_name: team.team_name().to_string(),
            manager_name: team.manager_name().to_string(),
            player: player.clone(),
            reason,
        }
    }

    #[must_use]
    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    #[must_use]
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    #[must_use]
    pub fn manager_name(&self) -> &str {
        &self.manager_name
    }

    #[must_use]
    pub const fn player(&self) -> &PlayerSlot {
        &self.player
    }

    /// Human-readable explanation naming the actual status and the rule broken.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
