// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DiscordConfig, DispatchOptions, EmailConfig, FileConfig, IssueTrackerConfig, NotifyConfig,
    SlackConfig,
};
use irwatch::{ComplianceReport, LeagueContext, run_check};
use irwatch_domain::{PlayerSlot, RosterSlot, TeamRoster, parse_status_list};
use std::path::Path;
use std::time::Duration;
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_time() -> OffsetDateTime {
    datetime!(2025-10-16 12:30:45 UTC)
}

pub fn create_test_options() -> DispatchOptions {
    DispatchOptions {
        dry_run: false,
        timeout: Duration::from_secs(5),
    }
}

/// Two violations on two different teams, plus one compliant team.
pub fn create_violation_report() -> ComplianceReport {
    let rosters: Vec<TeamRoster> = vec![
        TeamRoster::new(
            "1",
            "Gridiron Gurus",
            "Alex",
            vec![
                PlayerSlot::new("p1", "Quinn Questionable", "Q", RosterSlot::InjuredReserve)
                    .with_injury_note("Hamstring"),
            ],
        ),
        TeamRoster::new(
            "2",
            "Blitz Brigade",
            "Blair",
            vec![PlayerSlot::new(
                "p2",
                "Pat Probable",
                "P",
                RosterSlot::InjuredReserve,
            )],
        ),
        TeamRoster::new(
            "3",
            "End Zone Elite",
            "Casey",
            vec![PlayerSlot::new("p3", "Otto Out", "O", RosterSlot::InjuredReserve)],
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

/// Every team compliant, one of them using an IR slot.
pub fn create_clean_report() -> ComplianceReport {
    let rosters: Vec<TeamRoster> = vec![
        TeamRoster::new(
            "1",
            "Gridiron Gurus",
            "Alex",
            vec![PlayerSlot::new("p1", "Ida Injured", "IR", RosterSlot::InjuredReserve)],
        ),
        TeamRoster::new(
            "2",
            "Blitz Brigade",
            "Blair",
            vec![PlayerSlot::new("p2", "Sam Starter", "", RosterSlot::Starter(String::from("QB")))],
        ),
    ];
    run_check(
        6,
        &rosters,
        &parse_status_list("IR,O").unwrap(),
        None,
        create_test_time(),
    )
    .unwrap()
}

pub fn slack(url: &str) -> SlackConfig {
    SlackConfig::from_parts(Some(url.to_string()), None).unwrap()
}

pub fn discord(url: &str) -> DiscordConfig {
    DiscordConfig::from_parts(Some(url.to_string())).unwrap()
}

pub fn issue_tracker(api_url: &str, issues_for_all_reports: bool) -> IssueTrackerConfig {
    IssueTrackerConfig::from_parts(
        Some(api_url.to_string()),
        Some(String::from("league/ir-watch")),
        Some(String::from("ghp_secret")),
        Some(String::from("commish")),
        issues_for_all_reports,
    )
    .unwrap()
}

pub fn email(api_url: &str) -> EmailConfig {
    EmailConfig::from_parts(
        Some(api_url.to_string()),
        Some(String::from("SG.secret")),
        None,
        Some(String::from("commish@example.com")),
    )
    .unwrap()
}

pub fn file(dir: &Path) -> FileConfig {
    FileConfig {
        output_dir: dir.to_path_buf(),
    }
}

/// A configuration with every channel present and email enabled.
pub fn create_full_config(dir: &Path) -> NotifyConfig {
    NotifyConfig {
        slack: Some(slack("https://hooks.slack.test/services/x")),
        discord: Some(discord("https://discord.test/api/webhooks/x")),
        issue_tracker: Some(issue_tracker("https://api.github.test", false)),
        email: Some(email("https://api.sendgrid.test")),
        use_email: true,
        file: Some(file(dir)),
    }
}
