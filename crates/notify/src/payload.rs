// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Channel-specific envelopes around a rendered [`Message`].

use crate::channel::{Channel, ChannelKind};
use crate::config::{EmailConfig, IssueTrackerConfig, SlackConfig};
use crate::error::DispatchError;
use crate::message::{Message, Severity};
use irwatch::{ComplianceReport, ViolationRecord};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// File the file channel appends JSON lines to.
pub const NOTIFICATION_LOG_FILE: &str = "ir_notifications.jsonl";

const BOT_NAME: &str = "IR Compliance Bot";
const FOOTER: &str = "Fantasy Football IR Compliance System";
const DISCORD_DESCRIPTION_LIMIT: usize = 2000;
const VIOLATION_LABELS: &[&str] = &["ir-violation", "commissioner-action-required", "automated"];
const CLEAN_LABELS: &[&str] = &["ir-compliance", "automated"];

/// A message formatted for one channel, ready to send or inspect.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPayload {
    pub kind: ChannelKind,
    pub message: Message,
    /// The exact JSON document the channel receives.
    pub document: serde_json::Value,
}

impl RenderedPayload {
    /// Returns the payload as it would be sent.
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.document).unwrap_or_else(|_| self.document.to_string())
    }
}

#[derive(Debug, Serialize)]
struct SlackAttachment<'a> {
    color: &'static str,
    title: &'a str,
    text: &'a str,
    footer: &'static str,
    ts: i64,
}

#[derive(Debug, Serialize)]
struct SlackPayload<'a> {
    channel: &'a str,
    username: &'static str,
    icon_emoji: &'static str,
    attachments: Vec<SlackAttachment<'a>>,
}

#[derive(Debug, Serialize)]
struct DiscordFooter {
    text: &'static str,
}

#[derive(Debug, Serialize)]
struct DiscordEmbed<'a> {
    title: &'a str,
    description: String,
    color: u32,
    footer: DiscordFooter,
}

#[derive(Debug, Serialize)]
struct DiscordPayload<'a> {
    username: &'static str,
    embeds: Vec<DiscordEmbed<'a>>,
}

#[derive(Debug, Serialize)]
struct IssuePayload<'a> {
    title: &'a str,
    body: String,
    labels: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct EmailAddress<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct EmailPersonalization<'a> {
    to: Vec<EmailAddress<'a>>,
    subject: &'a str,
}

#[derive(Debug, Serialize)]
struct EmailContent<'a> {
    #[serde(rename = "type")]
    content_type: &'static str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    personalizations: Vec<EmailPersonalization<'a>>,
    from: EmailAddress<'a>,
    content: Vec<EmailContent<'a>>,
}

#[derive(Debug, Serialize)]
struct FileRecord<'a> {
    #[serde(with = "time::serde::rfc3339")]
    recorded_at: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    week: Option<u32>,
    subject: &'a str,
    body: &'a str,
    total_violations: usize,
    teams_with_violations: usize,
    violations: &'a [ViolationRecord],
}

#[derive(Debug, Serialize)]
struct PlainPayload<'a> {
    subject: &'a str,
    body: &'a str,
}

/// Truncates to at most `limit` characters, marking the cut.
fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

fn slack_document(config: &SlackConfig, message: &Message) -> Result<serde_json::Value, DispatchError> {
    let color: &'static str = match message.severity {
        Severity::Violations => "danger",
        Severity::Clean => "good",
        Severity::Test => "#439FE0",
    };
    let payload: SlackPayload<'_> = SlackPayload {
        channel: &config.channel,
        username: BOT_NAME,
        icon_emoji: ":football:",
        attachments: vec![SlackAttachment {
            color,
            title: &message.subject,
            text: &message.body,
            footer: FOOTER,
            ts: message.generated_at.unix_timestamp(),
        }],
    };
    Ok(serde_json::to_value(payload)?)
}

fn discord_document(message: &Message) -> Result<serde_json::Value, DispatchError> {
    let color: u32 = match message.severity {
        Severity::Violations => 0x00FF_0000,
        Severity::Clean => 0x0000_FF00,
        Severity::Test => 0x0034_98DB,
    };
    let payload: DiscordPayload<'_> = DiscordPayload {
        username: BOT_NAME,
        embeds: vec![DiscordEmbed {
            title: &message.subject,
            description: truncate_chars(&message.body, DISCORD_DESCRIPTION_LIMIT),
            color,
            footer: DiscordFooter { text: FOOTER },
        }],
    };
    Ok(serde_json::to_value(payload)?)
}

/// Wraps the message in the commissioner follow-up template.
fn issue_body(message: &Message, report: Option<&ComplianceReport>) -> String {
    let generated: String = message
        .generated_at
        .format(&Rfc3339)
        .unwrap_or_else(|_| message.generated_at.to_string());
    let week: String = message
        .week
        .map_or_else(|| String::from("n/a"), |week| week.to_string());
    let total: usize = report.map_or(0, |r| r.total_violations);
    let teams: usize = report.map_or(0, |r| r.teams_with_violations);

    let (title, details): (&str, &str) = match message.severity {
        Severity::Violations => ("🚨 IR Compliance Violation Report", "⚠️ Violations Detected"),
        Severity::Clean => ("✅ IR Compliance Report", "✅ All Teams Compliant"),
        Severity::Test => ("🧪 IR Compliance Test Notification", "🧪 Test Details"),
    };

    let mut body: String = format!("## {title}\n\n");
    body.push_str(
        "**This issue was automatically created by the IR compliance monitoring system.**\n\n",
    );
    body.push_str("### 📊 Summary\n");
    body.push_str(&format!("- **Week:** {week}\n"));
    body.push_str(&format!("- **Total Violations:** {total}\n"));
    body.push_str(&format!("- **Teams with Violations:** {teams}\n"));
    body.push_str(&format!("- **Date Generated:** {generated}\n\n"));
    body.push_str(&format!("### {details}\n\n"));
    body.push_str(&message.body);
    if message.severity == Severity::Violations {
        body.push_str("\n### ✅ Required Actions\n\n");
        body.push_str("- [ ] Contact affected team managers\n");
        body.push_str("- [ ] Verify player status changes\n");
        body.push_str("- [ ] Ensure IR slot compliance\n");
        body.push_str("- [ ] Follow up on corrections\n");
        body.push_str("- [ ] Close this issue once resolved\n");
    }
    body.push('\n');

    if let Some(report) = report {
        body.push_str("### 📋 IR Eligible Statuses\n");
        body.push_str("Players with these statuses may be placed in IR slots:\n");
        if report.eligible_statuses.is_empty() {
            body.push_str("- (none configured)\n");
        }
        for status in &report.eligible_statuses {
            body.push_str(&format!("- **{status}**\n"));
        }
        body.push('\n');
    }

    body.push_str("---\n*Generated by the IR compliance checker.*");
    body
}

fn issue_document(
    config: &IssueTrackerConfig,
    message: &Message,
    report: Option<&ComplianceReport>,
) -> Result<serde_json::Value, DispatchError> {
    let labels: &[&'static str] = if message.severity == Severity::Violations {
        VIOLATION_LABELS
    } else {
        CLEAN_LABELS
    };
    let payload: IssuePayload<'_> = IssuePayload {
        title: &message.subject,
        body: issue_body(message, report),
        labels: labels.to_vec(),
        assignee: config.assignee.as_deref(),
    };
    Ok(serde_json::to_value(payload)?)
}

fn email_document(config: &EmailConfig, message: &Message) -> Result<serde_json::Value, DispatchError> {
    let payload: EmailPayload<'_> = EmailPayload {
        personalizations: vec![EmailPersonalization {
            to: vec![EmailAddress { email: &config.to }],
            subject: &message.subject,
        }],
        from: EmailAddress {
            email: &config.from,
        },
        content: vec![EmailContent {
            content_type: "text/plain",
            value: &message.body,
        }],
    };
    Ok(serde_json::to_value(payload)?)
}

fn file_document(
    message: &Message,
    report: Option<&ComplianceReport>,
) -> Result<serde_json::Value, DispatchError> {
    let record: FileRecord<'_> = FileRecord {
        recorded_at: message.generated_at,
        week: message.week,
        subject: &message.subject,
        body: &message.body,
        total_violations: report.map_or(0, |r| r.total_violations),
        teams_with_violations: report.map_or(0, |r| r.teams_with_violations),
        violations: report.map_or(&[], |r| r.violations.as_slice()),
    };
    Ok(serde_json::to_value(record)?)
}

/// Formats a message for the given channel.
///
/// # Arguments
///
/// * `channel` - The selected channel
/// * `message` - The rendered message
/// * `report` - The report the message was rendered from, absent for test messages
///
/// # Errors
///
/// Returns a serialization error if the payload cannot be encoded.
pub fn render_payload(
    channel: &Channel,
    message: &Message,
    report: Option<&ComplianceReport>,
) -> Result<RenderedPayload, DispatchError> {
    let document: serde_json::Value = match channel {
        Channel::Slack(config) => slack_document(config, message)?,
        Channel::Discord(_) => discord_document(message)?,
        Channel::IssueTracker(config) => issue_document(config, message, report)?,
        Channel::Email(config) => email_document(config, message)?,
        Channel::File(_) => file_document(message, report)?,
        Channel::Unconfigured => serde_json::to_value(PlainPayload {
            subject: &message.subject,
            body: &message.body,
        })?,
    };

    Ok(RenderedPayload {
        kind: channel.kind(),
        message: message.clone(),
        document,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_keeps_short_text() {
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        let text: String = "⚠️".repeat(1500);

        let truncated: String = truncate_chars(&text, DISCORD_DESCRIPTION_LIMIT);

        assert_eq!(truncated.chars().count(), DISCORD_DESCRIPTION_LIMIT);
        assert!(truncated.ends_with('…'));
    }
}
