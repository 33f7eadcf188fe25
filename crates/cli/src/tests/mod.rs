// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod run_tests;

use crate::Args;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::macros::datetime;

pub const VIOLATION_SNAPSHOT: &str = r#"{
    "league": { "name": "Sunday Funday", "season": "2025" },
    "current_week": 6,
    "teams": [
        {
            "team_id": "1", "team_name": "Gridiron Gurus", "manager": "Alex",
            "players": [
                { "player_id": "p1", "name": "Quinn Questionable", "status": "Q", "roster_slot": "IR", "injury_note": "Ankle" },
                { "player_id": "p2", "name": "Ida Injured", "status": "IR", "roster_slot": "IR" }
            ]
        },
        {
            "team_id": "2", "team_name": "Blitz Brigade", "manager": "Blair",
            "players": [
                { "player_id": "p3", "name": "Pat Probable", "status": "P", "roster_slot": "IR" },
                { "player_id": "p4", "name": "Benny Bench", "status": "Q", "roster_slot": "BN" }
            ]
        }
    ]
}"#;

pub const CLEAN_SNAPSHOT: &str = r#"{
    "current_week": 3,
    "teams": [
        {
            "team_id": "1", "team_name": "Gridiron Gurus", "manager": "Alex",
            "players": [
                { "player_id": "p2", "name": "Ida Injured", "status": "IR", "roster_slot": "IR" }
            ]
        }
    ]
}"#;

pub fn create_test_time() -> OffsetDateTime {
    datetime!(2025-10-16 12:30:45 UTC)
}

/// Arguments with nothing taken from the environment.
pub fn base_args(dir: &Path) -> Args {
    Args {
        week: None,
        output_dir: dir.join("data"),
        no_email: false,
        dry_run: false,
        force_email: false,
        config_check: false,
        test: false,
        eligible_statuses: None,
        always_send: false,
        roster_file: None,
        roster_url: None,
        roster_token: None,
        slack_webhook_url: None,
        slack_channel: None,
        discord_webhook_url: None,
        github_repository: None,
        github_token: None,
        github_api_url: None,
        issue_assignee: None,
        issues_for_all_reports: false,
        sendgrid_api_key: None,
        sendgrid_from_email: None,
        commissioner_email: None,
        sendgrid_api_url: None,
        use_email: false,
        notification_output_dir: dir.join("notifications"),
        file_notifications: true,
        timeout_secs: 5,
    }
}

/// Writes a roster snapshot and returns arguments pointing at it.
pub fn args_with_snapshot(dir: &Path, snapshot: &str) -> Args {
    let path: PathBuf = dir.join("rosters.json");
    std::fs::write(&path, snapshot).unwrap();
    Args {
        roster_file: Some(path),
        ..base_args(dir)
    }
}
