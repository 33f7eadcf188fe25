// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Player status codes the league is known to report.
///
/// Configured eligible statuses are validated against this table.
pub const KNOWN_STATUS_CODES: &[&str] = &[
    "IR", "IR-R", "O", "Q", "D", "P", "DTD", "PUP", "PUP-P", "PUP-R", "NFI", "NFI-A", "NFI-R",
    "SUSP", "NA", "COVID-19",
];

/// Status values that never qualify for an IR slot, whatever the rule set says.
///
/// The empty string is what the league reports for a healthy player.
const NEVER_ELIGIBLE_STATUSES: &[&str] = &["", "UNKNOWN", "ACTIVE"];

/// A league-reported player status code.
///
/// Codes are opaque strings normalized to uppercase so that comparison is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode {
    value: String,
}

impl StatusCode {
    /// Creates a status code without checking it against the known table.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw code (trimmed and normalized to uppercase)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_uppercase(),
        }
    }

    /// Returns the normalized code.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the code appears in [`KNOWN_STATUS_CODES`].
    #[must_use]
    pub fn is_known(&self) -> bool {
        KNOWN_STATUS_CODES.contains(&self.value.as_str())
    }

    /// Returns whether the code can never make a player IR-eligible.
    #[must_use]
    pub fn is_never_eligible(&self) -> bool {
        NEVER_ELIGIBLE_STATUSES.contains(&self.value.as_str())
    }
}

impl FromStr for StatusCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: Self = Self::new(s);
        if code.value.is_empty() {
            return Err(DomainError::EmptyStatusCode);
        }
        if !code.is_known() {
            return Err(DomainError::UnknownStatusCode(code.value));
        }
        Ok(code)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The category of roster slot a player occupies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RosterSlot {
    /// A starting lineup position such as `QB` or `W/R/T`.
    Starter(String),
    /// The bench (`BN`).
    Bench,
    /// The injured reserve slot (`IR`).
    InjuredReserve,
}

impl RosterSlot {
    /// Returns whether this slot is subject to IR eligibility rules.
    #[must_use]
    pub const fn is_injured_reserve(&self) -> bool {
        matches!(self, Self::InjuredReserve)
    }

    /// Returns the slot label as the league reports it.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Starter(position) => position,
            Self::Bench => "BN",
            Self::InjuredReserve => "IR",
        }
    }
}

impl From<&str> for RosterSlot {
    fn from(value: &str) -> Self {
        let normalized: String = value.trim().to_uppercase();
        match normalized.as_str() {
            "IR" => Self::InjuredReserve,
            "BN" | "BENCH" => Self::Bench,
            _ => Self::Starter(normalized),
        }
    }
}

impl From<String> for RosterSlot {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<RosterSlot> for String {
    fn from(slot: RosterSlot) -> Self {
        slot.label().to_string()
    }
}

impl std::fmt::Display for RosterSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accepts identifiers the league sends either as JSON strings or numbers.
fn deserialize_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Identifier {
        Text(String),
        Number(i64),
    }

    match Identifier::deserialize(deserializer)? {
        Identifier::Text(text) => Ok(text),
        Identifier::Number(number) => Ok(number.to_string()),
    }
}

/// Reads a status that may be absent or `null`, both of which mean no status.
fn deserialize_status<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One player's roster assignment at the moment the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSlot {
    #[serde(deserialize_with = "deserialize_identifier")]
    player_id: String,
    name: String,
    /// Raw status as reported; empty for healthy players.
    #[serde(default, deserialize_with = "deserialize_status")]
    status: String,
    roster_slot: RosterSlot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    injury_note: Option<String>,
}

impl PlayerSlot {
    /// Creates a new `PlayerSlot`.
    ///
    /// # Arguments
    ///
    /// * `player_id` - The league's player key
    /// * `name` - The player's display name
    /// * `status` - The league-reported status code, empty if healthy
    /// * `roster_slot` - The slot the player currently occupies
    #[must_use]
    pub fn new(player_id: &str, name: &str, status: &str, roster_slot: RosterSlot) -> Self {
        Self {
            player_id: player_id.to_string(),
            name: name.to_string(),
            status: status.to_string(),
            roster_slot,
            injury_note: None,
        }
    }

    /// Attaches the league's injury note.
    #[must_use]
    pub fn with_injury_note(mut self, note: &str) -> Self {
        self.injury_note = Some(note.to_string());
        self
    }

    #[must_use]
    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the status normalized for comparison.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::new(&self.status)
    }

    #[must_use]
    pub const fn roster_slot(&self) -> &RosterSlot {
        &self.roster_slot
    }

    #[must_use]
    pub fn injury_note(&self) -> Option<&str> {
        self.injury_note.as_deref()
    }
}

/// One team's roster as returned by the snapshot provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    #[serde(deserialize_with = "deserialize_identifier")]
    team_id: String,
    team_name: String,
    #[serde(alias = "manager")]
    manager_name: String,
    #[serde(default)]
    players: Vec<PlayerSlot>,
}

impl TeamRoster {
    /// Creates a new `TeamRoster`.
    ///
    /// # Arguments
    ///
    /// * `team_id` - The league's team identifier
    /// * `team_name` - The team's display name
    /// * `manager_name` - The managing user's nickname
    /// * `players` - Players in snapshot order
    #[must_use]
    pub fn new(team_id: &str, team_name: &str, manager_name: &str, players: Vec<PlayerSlot>) -> Self {
        Self {
            team_id: team_id.to_string(),
            team_name: team_name.to_string(),
            manager_name: manager_name.to_string(),
            players,
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
    pub fn players(&self) -> &[PlayerSlot] {
        &self.players
    }

    /// Iterates the players occupying IR slots, in roster order.
    pub fn ir_occupants(&self) -> impl Iterator<Item = &PlayerSlot> {
        self.players
            .iter()
            .filter(|player| player.roster_slot.is_injured_reserve())
    }
}
