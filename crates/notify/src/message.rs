// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable rendering of a compliance report.
//!
//! Every channel starts from the same [`Message`]; channel payloads only
//! change the envelope around it.

use irwatch::{ComplianceReport, ViolationRecord};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// How urgent a message is, which drives emoji and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// No violations.
    Clean,
    /// At least one violation.
    Violations,
    /// A connectivity test, not a real report.
    Test,
}

impl Severity {
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Clean => "✅",
            Self::Violations => "⚠️",
            Self::Test => "🧪",
        }
    }
}

/// A rendered subject and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub subject: String,
    pub body: String,
    pub severity: Severity,
    pub week: Option<u32>,
    pub generated_at: OffsetDateTime,
}

fn timestamp(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_else(|_| at.to_string())
}

fn display_status(status: &str) -> &str {
    if status.trim().is_empty() {
        "(none)"
    } else {
        status
    }
}

fn eligible_line(report: &ComplianceReport) -> String {
    if report.eligible_statuses.is_empty() {
        String::from("**IR Eligible Statuses:** (none configured)\n")
    } else {
        format!(
            "**IR Eligible Statuses:** {}\n",
            report.eligible_statuses.join(", ")
        )
    }
}

fn push_violation(body: &mut String, record: &ViolationRecord) {
    body.push_str(&format!("  • **{}**\n", record.player_name));
    body.push_str(&format!(
        "    - Current Status: {}\n",
        display_status(&record.current_status)
    ));
    body.push_str(&format!("    - Issue: {}\n", record.reason));
    if let Some(note) = &record.injury_note {
        body.push_str(&format!("    - Injury Note: {note}\n"));
    }
    body.push('\n');
}

/// Renders the subject line for a report.
fn subject(report: &ComplianceReport, severity: Severity) -> String {
    if report.is_compliant() {
        format!(
            "{} IR Compliance Check - Week {}: All Teams Compliant",
            severity.emoji(),
            report.week
        )
    } else {
        format!(
            "{} IR Compliance Violations - Week {}: {} Violation(s) Found",
            severity.emoji(),
            report.week,
            report.total_violations
        )
    }
}

/// Renders a report into the message every channel delivers.
///
/// The body carries the week, the counts, and for each violation the team,
/// manager, player, current status, and reason.
#[must_use]
pub fn render_message(report: &ComplianceReport) -> Message {
    let severity: Severity = if report.is_compliant() {
        Severity::Clean
    } else {
        Severity::Violations
    };

    let mut body: String = String::new();
    if let Some(league) = &report.league {
        body.push_str(&format!(
            "**League:** {} (Season {})\n\n",
            league.name, league.season
        ));
    }
    body.push_str(&format!(
        "**Fantasy Football IR Compliance Report - Week {}**\n\n",
        report.week
    ));

    if report.is_compliant() {
        body.push_str("🎉 **GREAT NEWS!** All teams are in compliance with IR slot rules.\n\n");
        body.push_str("**Summary:**\n");
        body.push_str(&format!(
            "- Total Teams Checked: {}\n",
            report.teams_checked
        ));
        body.push_str(&format!(
            "- Teams in Compliance: {}\n",
            report.compliant_teams.len()
        ));
        body.push_str("- Violations Found: 0\n\n");

        let with_ir: Vec<_> = report
            .compliant_teams
            .iter()
            .filter(|team| team.ir_players_count > 0)
            .collect();
        if !with_ir.is_empty() {
            body.push_str("**Teams with IR Players (All Compliant):**\n");
            for team in with_ir {
                body.push_str(&format!(
                    "- {} ({}): {} IR player(s)\n",
                    team.team_name, team.manager, team.ir_players_count
                ));
            }
            body.push('\n');
        }
    } else {
        body.push_str("⚠️ **VIOLATIONS DETECTED** - Immediate attention required!\n\n");
        body.push_str("**Summary:**\n");
        body.push_str(&format!(
            "- Total Teams Checked: {}\n",
            report.teams_checked
        ));
        body.push_str(&format!(
            "- Teams with Violations: {}\n",
            report.teams_with_violations
        ));
        body.push_str(&format!(
            "- Total Violations: {}\n\n",
            report.total_violations
        ));
        body.push_str("**VIOLATION DETAILS:**\n\n");

        for (_, records) in report.violations_by_team() {
            if let Some(first) = records.first() {
                body.push_str(&format!("**{} ({})**\n", first.team_name, first.manager));
            }
            body.push_str(&format!("Violations: {}\n\n", records.len()));
            for record in records {
                push_violation(&mut body, record);
            }
        }

        if !report.compliant_teams.is_empty() {
            body.push_str("**Compliant Teams:**\n");
            for team in &report.compliant_teams {
                body.push_str(&format!("- {} ({})\n", team.team_name, team.manager));
            }
            body.push('\n');
        }
    }

    body.push_str(&eligible_line(report));

    if !report.is_compliant() {
        body.push_str(
            "\n**ACTION REQUIRED:**\nPlease contact the teams with violations to correct their \
             IR slot usage. Players must be moved out of the IR slot if they no longer qualify.\n",
        );
    }

    body.push_str(&format!(
        "\n*Report generated on {}*\n",
        timestamp(report.generated_at)
    ));

    Message {
        subject: subject(report, severity),
        body,
        severity,
        week: Some(report.week),
        generated_at: report.generated_at,
    }
}

/// Renders the connectivity test notification.
#[must_use]
pub fn render_test_message(generated_at: OffsetDateTime) -> Message {
    Message {
        subject: format!(
            "{} Test IR Compliance Notification",
            Severity::Test.emoji()
        ),
        body: String::from("This is a test notification from the IR compliance system."),
        severity: Severity::Test,
        week: None,
        generated_at,
    }
}
