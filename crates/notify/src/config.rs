// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Immutable notification settings, resolved once per run.
//!
//! Every credential-bearing type redacts itself in `Debug` output.

use std::path::PathBuf;

/// Slack channel used when none is configured.
pub const DEFAULT_SLACK_CHANNEL: &str = "#fantasy-football";
/// Issue tracker REST API root.
pub const DEFAULT_ISSUE_API_URL: &str = "https://api.github.com";
/// Email delivery API root.
pub const DEFAULT_EMAIL_API_URL: &str = "https://api.sendgrid.com";
/// Sender address used when none is configured.
pub const DEFAULT_EMAIL_FROM: &str = "noreply@yourleague.com";

const REDACTED: &str = "<redacted>";

/// Treats unset and blank values the same way.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Slack incoming webhook.
#[derive(Clone, PartialEq, Eq)]
pub struct SlackConfig {
    pub webhook_url: String,
    pub channel: String,
}

impl SlackConfig {
    /// Builds the Slack settings if a webhook URL is present.
    #[must_use]
    pub fn from_parts(webhook_url: Option<String>, channel: Option<String>) -> Option<Self> {
        Some(Self {
            webhook_url: non_blank(webhook_url)?,
            channel: non_blank(channel).unwrap_or_else(|| DEFAULT_SLACK_CHANNEL.to_string()),
        })
    }
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("webhook_url", &REDACTED)
            .field("channel", &self.channel)
            .finish()
    }
}

/// Discord webhook.
#[derive(Clone, PartialEq, Eq)]
pub struct DiscordConfig {
    pub webhook_url: String,
}

impl DiscordConfig {
    #[must_use]
    pub fn from_parts(webhook_url: Option<String>) -> Option<Self> {
        Some(Self {
            webhook_url: non_blank(webhook_url)?,
        })
    }
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("webhook_url", &REDACTED)
            .finish()
    }
}

/// Issue tracker access (GitHub-compatible REST API).
#[derive(Clone, PartialEq, Eq)]
pub struct IssueTrackerConfig {
    pub api_url: String,
    /// `owner/name`.
    pub repository: String,
    pub token: String,
    pub assignee: Option<String>,
    /// Open an issue even when the report is clean.
    pub issues_for_all_reports: bool,
}

impl IssueTrackerConfig {
    /// Builds the issue tracker settings if both repository and token are present.
    #[must_use]
    pub fn from_parts(
        api_url: Option<String>,
        repository: Option<String>,
        token: Option<String>,
        assignee: Option<String>,
        issues_for_all_reports: bool,
    ) -> Option<Self> {
        Some(Self {
            api_url: non_blank(api_url).unwrap_or_else(|| DEFAULT_ISSUE_API_URL.to_string()),
            repository: non_blank(repository)?,
            token: non_blank(token)?,
            assignee: non_blank(assignee),
            issues_for_all_reports,
        })
    }

    /// The endpoint issues are created at.
    #[must_use]
    pub fn issues_url(&self) -> String {
        format!(
            "{}/repos/{}/issues",
            self.api_url.trim_end_matches('/'),
            self.repository
        )
    }
}

impl std::fmt::Debug for IssueTrackerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueTrackerConfig")
            .field("api_url", &self.api_url)
            .field("repository", &self.repository)
            .field("token", &REDACTED)
            .field("assignee", &self.assignee)
            .field("issues_for_all_reports", &self.issues_for_all_reports)
            .finish()
    }
}

/// Email delivery through a SendGrid-compatible HTTP API.
#[derive(Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
    pub to: String,
}

impl EmailConfig {
    /// Builds the email settings if both API key and recipient are present.
    #[must_use]
    pub fn from_parts(
        api_url: Option<String>,
        api_key: Option<String>,
        from: Option<String>,
        to: Option<String>,
    ) -> Option<Self> {
        Some(Self {
            api_url: non_blank(api_url).unwrap_or_else(|| DEFAULT_EMAIL_API_URL.to_string()),
            api_key: non_blank(api_key)?,
            from: non_blank(from).unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string()),
            to: non_blank(to)?,
        })
    }

    #[must_use]
    pub fn send_url(&self) -> String {
        format!("{}/v3/mail/send", self.api_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &REDACTED)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

/// Local append-only notification log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    pub output_dir: PathBuf,
}

/// Every notification setting for one run.
///
/// A `None` channel is not configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyConfig {
    pub slack: Option<SlackConfig>,
    pub discord: Option<DiscordConfig>,
    pub issue_tracker: Option<IssueTrackerConfig>,
    pub email: Option<EmailConfig>,
    /// Email is only selected when explicitly requested.
    pub use_email: bool,
    pub file: Option<FileConfig>,
}
