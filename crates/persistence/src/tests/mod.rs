// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use irwatch::{ComplianceReport, LeagueContext, run_check};
use irwatch_domain::{PlayerSlot, RosterSlot, TeamRoster, parse_status_list};
use time::OffsetDateTime;
use time::macros::datetime;

pub const SNAPSHOT_JSON: &str = r#"{
    "league": { "name": "Sunday Funday", "season": "2025" },
    "current_week": 6,
    "teams": [
        {
            "team_id": 1,
            "team_name": "Gridiron Gurus",
            "manager": "Alex",
            "players": [
                { "player_id": 101, "name": "Quinn Questionable", "status": "Q", "roster_slot": "IR", "injury_note": "Ankle" },
                { "player_id": "102", "name": "Sam Starter", "roster_slot": "QB" }
            ]
        },
        {
            "team_id": "2",
            "team_name": "Blitz Brigade",
            "manager_name": "Blair",
            "players": [
                { "player_id": "201", "name": "Otto Out", "status": "O", "roster_slot": "IR" },
                { "player_id": "202", "name": "Benny Bench", "status": "Q", "roster_slot": "BN" }
            ]
        }
    ]
}"#;

pub fn create_test_time() -> OffsetDateTime {
    datetime!(2025-10-16 12:30:45.123 UTC)
}

pub fn create_test_report() -> ComplianceReport {
    let rosters: Vec<TeamRoster> = vec![
        TeamRoster::new(
            "1",
            "Gridiron Gurus",
            "Alex",
            vec![
                PlayerSlot::new("p1", "Quinn Questionable", "Q", RosterSlot::InjuredReserve)
                    .with_injury_note("Ankle"),
            ],
        ),
        TeamRoster::new(
            "2",
            "Blitz Brigade",
            "Blair",
            vec![PlayerSlot::new("p2", "Otto Out", "O", RosterSlot::InjuredReserve)],
        ),
    ];
    run_check(
        6,
        &rosters,
        &parse_status_list("IR,O").unwrap(),
        Some(LeagueContext {
            name: String::from("Sunday Funday"),
            season: String::from("2025"),
        }),
        create_test_time(),
    )
    .unwrap()
}
