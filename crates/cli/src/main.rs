// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod run;
mod settings;
mod summary;

use clap::Parser;
use clap::builder::BoolishValueParser;
use error::CliError;
use settings::Settings;
use std::path::PathBuf;
use std::process::ExitCode;
use time::OffsetDateTime;
use tracing::{error, info};

/// irwatch - IR slot compliance checker for fantasy football leagues
///
/// Checks every team's IR slots against the eligible status codes, saves the
/// report, and notifies the commissioner through the first configured channel
/// (Slack, Discord, GitHub issue, email, file).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Week number to check (default: the league's current week)
    #[arg(long)]
    week: Option<u32>,

    /// Output directory for reports
    #[arg(long, default_value = "data")]
    output_dir: PathBuf,

    /// Skip sending any notification
    #[arg(long)]
    no_email: bool,

    /// Perform the check and show the notification without sending it
    #[arg(long)]
    dry_run: bool,

    /// Send a notification even if no violations are found
    #[arg(long)]
    force_email: bool,

    /// Show notification configuration and exit
    #[arg(long, conflicts_with = "test")]
    config_check: bool,

    /// Send a test notification through the selected channel and exit
    #[arg(long)]
    test: bool,

    /// Comma-separated status codes allowed in IR slots
    #[arg(long, env = "IR_ELIGIBLE_STATUSES")]
    eligible_statuses: Option<String>,

    /// Send clean reports too
    #[arg(long, env = "ALWAYS_SEND_IR_REPORT", value_parser = BoolishValueParser::new())]
    always_send: bool,

    /// Roster snapshot JSON file
    #[arg(long, env = "IR_ROSTER_FILE", conflicts_with = "roster_url")]
    roster_file: Option<PathBuf>,

    /// Roster snapshot JSON endpoint
    #[arg(long, env = "IR_ROSTER_URL")]
    roster_url: Option<String>,

    /// Bearer token for the roster endpoint
    #[arg(long, env = "IR_ROSTER_TOKEN", hide_env_values = true)]
    roster_token: Option<String>,

    /// Slack incoming webhook URL
    #[arg(long, env = "SLACK_WEBHOOK_URL", hide_env_values = true)]
    slack_webhook_url: Option<String>,

    /// Slack channel to post to
    #[arg(long, env = "SLACK_CHANNEL")]
    slack_channel: Option<String>,

    /// Discord webhook URL
    #[arg(long, env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
    discord_webhook_url: Option<String>,

    /// Repository issues are opened in, as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    github_repository: Option<String>,

    /// Token used to open issues
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Issue tracker API root
    #[arg(long, env = "GITHUB_API_URL")]
    github_api_url: Option<String>,

    /// User assigned to opened issues
    #[arg(long, env = "IR_ISSUE_ASSIGNEE")]
    issue_assignee: Option<String>,

    /// Open an issue for clean reports too
    #[arg(long, env = "IR_ISSUES_FOR_ALL_REPORTS", value_parser = BoolishValueParser::new())]
    issues_for_all_reports: bool,

    /// Email API key
    #[arg(long, env = "SENDGRID_API_KEY", hide_env_values = true)]
    sendgrid_api_key: Option<String>,

    /// Sender address
    #[arg(long, env = "SENDGRID_FROM_EMAIL")]
    sendgrid_from_email: Option<String>,

    /// Recipient address
    #[arg(long, env = "COMMISSIONER_EMAIL")]
    commissioner_email: Option<String>,

    /// Email API root
    #[arg(long, env = "SENDGRID_API_URL")]
    sendgrid_api_url: Option<String>,

    /// Deliver through email even though chat and issue channels are preferred
    #[arg(long, env = "IR_USE_EMAIL", value_parser = BoolishValueParser::new())]
    use_email: bool,

    /// Directory the file channel appends to
    #[arg(long, env = "NOTIFICATION_OUTPUT_DIR", default_value = "notifications")]
    notification_output_dir: PathBuf,

    /// Enable the file channel
    #[arg(
        long,
        env = "IR_FILE_NOTIFICATIONS",
        default_value_t = true,
        action = clap::ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    file_notifications: bool,

    /// Timeout for every outbound request, in seconds
    #[arg(
        long,
        env = "IR_HTTP_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,
}

async fn execute(args: &Args) -> Result<(), CliError> {
    let settings: Settings = Settings::from_args(args)?;
    let now: OffsetDateTime = OffsetDateTime::now_utc();

    if args.config_check {
        run::config_check(&settings);
        return Ok(());
    }

    if args.test {
        run::send_test(&settings, now).await?;
        return Ok(());
    }

    let outcome: run::CheckOutcome = run::check(&settings, now).await?;
    info!(
        week = outcome.report.week,
        violations = outcome.report.total_violations,
        report = %outcome.report_path.display(),
        "Run finished"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match execute(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "IR compliance check failed");
            eprintln!("\n❌ Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests;
