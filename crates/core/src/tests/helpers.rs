// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::LeagueContext;
use irwatch_domain::{EligibilityRuleSet, PlayerSlot, RosterSlot, TeamRoster, parse_status_list};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_rules() -> EligibilityRuleSet {
    parse_status_list("IR,O,PUP,NFI,SUSP,NA").unwrap()
}

pub fn create_test_time() -> OffsetDateTime {
    datetime!(2025-10-16 12:30:45.123 UTC)
}

pub fn create_test_league() -> LeagueContext {
    LeagueContext {
        name: String::from("Sunday Funday"),
        season: String::from("2025"),
    }
}

/// Three teams: two violations on team 1, a clean team 2, one violation on team 3.
pub fn create_test_rosters() -> Vec<TeamRoster> {
    vec![
        TeamRoster::new(
            "1",
            "Team One",
            "Alex",
            vec![
                PlayerSlot::new("p1", "Quinn Questionable", "Q", RosterSlot::InjuredReserve)
                    .with_injury_note("Ankle"),
                PlayerSlot::new("p2", "Hal Healthy", "", RosterSlot::InjuredReserve),
                PlayerSlot::new("p3", "Ida Injured", "IR", RosterSlot::InjuredReserve),
            ],
        ),
        TeamRoster::new(
            "2",
            "Team Two",
            "Blair",
            vec![
                PlayerSlot::new("p4", "Otto Out", "O", RosterSlot::InjuredReserve),
                PlayerSlot::new("p5", "Benny Bench", "Q", RosterSlot::Bench),
            ],
        ),
        TeamRoster::new(
            "3",
            "Team Three",
            "Casey",
            vec![PlayerSlot::new(
                "p6",
                "Dana Doubtful",
                "D",
                RosterSlot::InjuredReserve,
            )],
        ),
    ]
}
