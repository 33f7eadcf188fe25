// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::{
    DiscordConfig, EmailConfig, FileConfig, IssueTrackerConfig, NotifyConfig, SlackConfig,
};

/// The kind of a delivery channel, without its settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Slack,
    Discord,
    IssueTracker,
    Email,
    File,
    /// Nothing could be configured; the report is generated but undelivered.
    Unconfigured,
}

impl ChannelKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Slack => "Slack",
            Self::Discord => "Discord",
            Self::IssueTracker => "GitHub Issues",
            Self::Email => "Email",
            Self::File => "File",
            Self::Unconfigured => "none",
        }
    }
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The delivery channel chosen for a run, carrying its settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Channel {
    Slack(SlackConfig),
    Discord(DiscordConfig),
    IssueTracker(IssueTrackerConfig),
    Email(EmailConfig),
    File(FileConfig),
    Unconfigured,
}

impl Channel {
    #[must_use]
    pub const fn kind(&self) -> ChannelKind {
        match self {
            Self::Slack(_) => ChannelKind::Slack,
            Self::Discord(_) => ChannelKind::Discord,
            Self::IssueTracker(_) => ChannelKind::IssueTracker,
            Self::Email(_) => ChannelKind::Email,
            Self::File(_) => ChannelKind::File,
            Self::Unconfigured => ChannelKind::Unconfigured,
        }
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !matches!(self, Self::Unconfigured)
    }
}

/// Chooses the single channel a report is delivered through.
///
/// Priority, first configured wins:
/// 1. Slack webhook
/// 2. Discord webhook
/// 3. Issue tracker
/// 4. Email, only when `use_email` is set
/// 5. File
///
/// Selection is stateless and re-evaluated every run.
#[must_use]
pub fn select_channel(config: &NotifyConfig) -> Channel {
    if let Some(slack) = &config.slack {
        return Channel::Slack(slack.clone());
    }
    if let Some(discord) = &config.discord {
        return Channel::Discord(discord.clone());
    }
    if let Some(issue_tracker) = &config.issue_tracker {
        return Channel::IssueTracker(issue_tracker.clone());
    }
    if let (true, Some(email)) = (config.use_email, &config.email) {
        return Channel::Email(email.clone());
    }
    if let Some(file) = &config.file {
        return Channel::File(file.clone());
    }
    Channel::Unconfigured
}

/// Reports which channels are configured, in priority order.
#[must_use]
pub fn channel_statuses(config: &NotifyConfig) -> Vec<(ChannelKind, bool)> {
    vec![
        (ChannelKind::Slack, config.slack.is_some()),
        (ChannelKind::Discord, config.discord.is_some()),
        (ChannelKind::IssueTracker, config.issue_tracker.is_some()),
        (ChannelKind::Email, config.email.is_some()),
        (ChannelKind::File, config.file.is_some()),
    ]
}
