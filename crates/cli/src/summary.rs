// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Console output.

use crate::settings::Settings;
use irwatch::ComplianceReport;
use irwatch_notify::{Channel, ChannelKind, RenderedPayload, channel_statuses, select_channel};
use std::fmt::Write;

const RULE: &str = "============================================================";

/// Renders the end-of-run summary.
pub fn render_summary(report: &ComplianceReport) -> String {
    let mut out: String = String::new();
    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "IR COMPLIANCE CHECK RESULTS - Week {}", report.week);
    if let Some(league) = &report.league {
        let _ = writeln!(out, "League: {} (Season {})", league.name, league.season);
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Total Teams Checked: {}", report.teams_checked);
    let _ = writeln!(out, "Violations Found: {}", report.total_violations);
    let _ = writeln!(out, "Teams with Violations: {}", report.teams_with_violations);
    let _ = writeln!(out, "Compliant Teams: {}", report.compliant_teams.len());

    if report.is_compliant() {
        let _ = writeln!(out, "\n✅ All teams are in compliance with IR slot rules!");
        return out;
    }

    let _ = writeln!(out, "\n⚠️ VIOLATIONS DETECTED:");
    for (_, records) in report.violations_by_team() {
        if let Some(first) = records.first() {
            let _ = writeln!(out, "\n{} ({}):", first.team_name, first.manager);
        }
        for record in records {
            let status: &str = if record.current_status.is_empty() {
                "(none)"
            } else {
                &record.current_status
            };
            let _ = writeln!(out, "  • {} - Status: {status}", record.player_name);
            if let Some(note) = &record.injury_note {
                let _ = writeln!(out, "    Note: {note}");
            }
        }
    }
    out
}

/// Renders the `--config-check` listing.
pub fn render_config_check(settings: &Settings) -> String {
    let mut out: String = String::from("IR Compliance Notification Configuration\n");
    let _ = writeln!(out, "{RULE}");
    for (kind, configured) in channel_statuses(&settings.notify) {
        let state: &str = if configured {
            "✅ configured"
        } else {
            "❌ not configured"
        };
        let _ = writeln!(out, "{:<15} {state}", format!("{kind}:"));
    }

    let channel: Channel = select_channel(&settings.notify);
    let selected: String = if channel.kind() == ChannelKind::Unconfigured {
        String::from("none (reports will be saved but not delivered)")
    } else {
        channel.kind().to_string()
    };
    let _ = writeln!(out, "\nSelected channel: {selected}");
    let _ = writeln!(
        out,
        "Email channel forced: {}",
        if settings.notify.use_email { "yes" } else { "no" }
    );

    let statuses: String = if settings.rules.is_empty() {
        String::from("(none, every IR occupant will be flagged)")
    } else {
        settings.rules.code_list().join(", ")
    };
    let _ = writeln!(out, "IR eligible statuses: {statuses}");

    let source: String = settings
        .roster_source
        .as_ref()
        .map_or_else(|| String::from("not configured"), irwatch_persistence::RosterSource::describe);
    let _ = writeln!(out, "Roster source: {source}");
    out
}

/// Renders what a dry run would have sent, including the exact channel document.
pub fn render_dry_run(payload: &RenderedPayload) -> String {
    format!(
        "\n🔍 DRY RUN: notification would be sent via {} with the following content:\n\nSubject: {}\n\nBody:\n{}\n\nPayload:\n{}",
        payload.kind,
        payload.message.subject,
        payload.message.body,
        payload.to_pretty_string()
    )
}
