// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of command-line arguments into immutable run settings.
//!
//! Everything that can be rejected is rejected here, before any fetch.

use crate::Args;
use crate::error::CliError;
use irwatch_domain::{EligibilityRuleSet, parse_status_list, validate_week};
use irwatch_notify::{
    DiscordConfig, DispatchOptions, EmailConfig, FileConfig, IssueTrackerConfig, NotifyConfig,
    SlackConfig,
};
use irwatch_persistence::RosterSource;
use std::path::PathBuf;
use std::time::Duration;

/// Everything one run needs, resolved once.
#[derive(Debug, Clone)]
pub struct Settings {
    /// The requested week; the snapshot's current week when absent.
    pub week: Option<u32>,
    pub output_dir: PathBuf,
    pub rules: EligibilityRuleSet,
    pub roster_source: Option<RosterSource>,
    pub notify: NotifyConfig,
    pub dispatch: DispatchOptions,
    /// Send a clean report too.
    pub always_send: bool,
    /// Skip delivery entirely.
    pub suppress_delivery: bool,
}

impl Settings {
    /// Validates and resolves the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Validation` for a malformed status list, an
    /// out-of-range week, or a roster URL that is not HTTP(S).
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let rules: EligibilityRuleSet = match &args.eligible_statuses {
            Some(list) => parse_status_list(list)?,
            None => EligibilityRuleSet::league_default(),
        };

        if let Some(week) = args.week {
            validate_week(week)?;
        }

        let timeout: Duration = Duration::from_secs(args.timeout_secs);

        Ok(Self {
            week: args.week,
            output_dir: args.output_dir.clone(),
            rules,
            roster_source: roster_source(args, timeout)?,
            notify: notify_config(args),
            dispatch: DispatchOptions {
                dry_run: args.dry_run,
                timeout,
            },
            always_send: args.always_send || args.force_email,
            suppress_delivery: args.no_email,
        })
    }
}

fn roster_source(args: &Args, timeout: Duration) -> Result<Option<RosterSource>, CliError> {
    if let Some(path) = &args.roster_file {
        return Ok(Some(RosterSource::File(path.clone())));
    }

    let Some(url) = args.roster_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
        return Ok(None);
    };
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(CliError::Validation(format!(
            "roster URL must start with http:// or https://, got {url:?}"
        )));
    }

    Ok(Some(RosterSource::Http {
        url: url.to_string(),
        token: args
            .roster_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string),
        timeout,
    }))
}

fn notify_config(args: &Args) -> NotifyConfig {
    NotifyConfig {
        slack: SlackConfig::from_parts(args.slack_webhook_url.clone(), args.slack_channel.clone()),
        discord: DiscordConfig::from_parts(args.discord_webhook_url.clone()),
        issue_tracker: IssueTrackerConfig::from_parts(
            args.github_api_url.clone(),
            args.github_repository.clone(),
            args.github_token.clone(),
            args.issue_assignee.clone(),
            args.issues_for_all_reports,
        ),
        email: EmailConfig::from_parts(
            args.sendgrid_api_url.clone(),
            args.sendgrid_api_key.clone(),
            args.sendgrid_from_email.clone(),
            args.commissioner_email.clone(),
        ),
        use_email: args.use_email,
        file: args.file_notifications.then(|| FileConfig {
            output_dir: args.notification_output_dir.clone(),
        }),
    }
}
