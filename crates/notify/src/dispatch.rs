// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delivery of a rendered report through the selected channel.
//!
//! The dispatcher makes at most one delivery attempt per run. Every outcome,
//! including failure, is returned as a [`DispatchResult`].

use crate::channel::{Channel, ChannelKind};
use crate::config::{DiscordConfig, EmailConfig, FileConfig, IssueTrackerConfig, SlackConfig};
use crate::error::{DispatchError, DispatchErrorKind};
use crate::message::{Message, Severity, render_message, render_test_message};
use crate::payload::{NOTIFICATION_LOG_FILE, RenderedPayload, render_payload};
use irwatch::ComplianceReport;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use time::OffsetDateTime;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("irwatch/", env!("CARGO_PKG_VERSION"));
const ERROR_BODY_LIMIT: usize = 200;

/// Run-wide delivery options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Render the payload but make no network or filesystem call.
    pub dry_run: bool,
    /// Upper bound on every outbound request.
    pub timeout: Duration,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The outcome of one delivery attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchResult {
    pub channel: ChannelKind,
    /// Whether the channel accepted the notification.
    pub delivered: bool,
    /// Whether delivery was intentionally not attempted.
    pub skipped: bool,
    pub error: Option<DispatchError>,
    /// The payload that was (or, in a dry run, would have been) sent.
    pub payload: Option<RenderedPayload>,
    /// Channel-provided identifier for the delivered notification.
    pub receipt: Option<String>,
}

impl DispatchResult {
    const fn empty(channel: ChannelKind) -> Self {
        Self {
            channel,
            delivered: false,
            skipped: false,
            error: None,
            payload: None,
            receipt: None,
        }
    }

    fn failed(channel: ChannelKind, error: DispatchError) -> Self {
        Self {
            error: Some(error),
            ..Self::empty(channel)
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    number: u64,
}

/// Sends reports through a channel.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: reqwest::Client,
    options: DispatchOptions,
}

impl Dispatcher {
    /// Creates a dispatcher with a shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(options: DispatchOptions) -> Result<Self, DispatchError> {
        let client: reqwest::Client = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, options })
    }

    /// Renders the report and delivers it through `channel`.
    pub async fn dispatch(&self, report: &ComplianceReport, channel: &Channel) -> DispatchResult {
        let message: Message = render_message(report);
        self.deliver(channel, &message, Some(report)).await
    }

    /// Delivers the connectivity test message through `channel`.
    pub async fn send_test(&self, channel: &Channel, generated_at: OffsetDateTime) -> DispatchResult {
        let message: Message = render_test_message(generated_at);
        self.deliver(channel, &message, None).await
    }

    async fn deliver(
        &self,
        channel: &Channel,
        message: &Message,
        report: Option<&ComplianceReport>,
    ) -> DispatchResult {
        let kind: ChannelKind = channel.kind();

        let clean_issue: bool = matches!(
            channel,
            Channel::IssueTracker(config)
                if message.severity == Severity::Clean && !config.issues_for_all_reports
        );
        if clean_issue {
            info!(channel = %kind, "Report is clean, not opening an issue");
            return DispatchResult {
                skipped: true,
                ..DispatchResult::empty(kind)
            };
        }

        let payload: RenderedPayload = match render_payload(channel, message, report) {
            Ok(payload) => payload,
            Err(err) => return DispatchResult::failed(kind, err),
        };

        if self.options.dry_run {
            info!(channel = %kind, subject = %message.subject, "Dry run, notification not sent");
            return DispatchResult {
                payload: Some(payload),
                ..DispatchResult::empty(kind)
            };
        }

        debug!(channel = %kind, "Delivering notification");
        let outcome: Result<Option<String>, DispatchError> = match channel {
            Channel::Slack(config) => self.send_slack(config, &payload).await,
            Channel::Discord(config) => self.send_discord(config, &payload).await,
            Channel::IssueTracker(config) => self.send_issue(config, &payload).await,
            Channel::Email(config) => self.send_email(config, &payload).await,
            Channel::File(config) => append_to_log(config, &payload).await,
            Channel::Unconfigured => Err(DispatchError::new(
                DispatchErrorKind::Unconfigured,
                "no notification channel is configured",
            )),
        };

        match outcome {
            Ok(receipt) => {
                info!(channel = %kind, receipt = ?receipt, "Notification delivered");
                DispatchResult {
                    delivered: true,
                    payload: Some(payload),
                    receipt,
                    ..DispatchResult::empty(kind)
                }
            }
            Err(err) => {
                warn!(channel = %kind, error = %err, "Notification delivery failed");
                DispatchResult {
                    payload: Some(payload),
                    ..DispatchResult::failed(kind, err)
                }
            }
        }
    }

    /// Posts a JSON document and maps non-success statuses to errors.
    async fn post_json(
        &self,
        url: &str,
        document: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<reqwest::Response, DispatchError> {
        let mut request: reqwest::RequestBuilder = self.client.post(url).json(document);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response: reqwest::Response = request.send().await?;
        let status: reqwest::StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: String = response.text().await.unwrap_or_default();
        let snippet: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        let kind: DispatchErrorKind =
            if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
            {
                DispatchErrorKind::Auth
            } else {
                DispatchErrorKind::Rejected {
                    status: status.as_u16(),
                }
            };
        Err(DispatchError::new(kind, snippet))
    }

    async fn send_slack(
        &self,
        config: &SlackConfig,
        payload: &RenderedPayload,
    ) -> Result<Option<String>, DispatchError> {
        let response: reqwest::Response = self
            .post_json(&config.webhook_url, &payload.document, None)
            .await?;
        let body: String = response.text().await?;
        if body.trim() != "ok" {
            return Err(DispatchError::new(
                DispatchErrorKind::MalformedResponse,
                format!("expected \"ok\" from Slack, got {:?}", body.trim()),
            ));
        }
        Ok(None)
    }

    async fn send_discord(
        &self,
        config: &DiscordConfig,
        payload: &RenderedPayload,
    ) -> Result<Option<String>, DispatchError> {
        self.post_json(&config.webhook_url, &payload.document, None)
            .await?;
        Ok(None)
    }

    async fn send_issue(
        &self,
        config: &IssueTrackerConfig,
        payload: &RenderedPayload,
    ) -> Result<Option<String>, DispatchError> {
        let response: reqwest::Response = self
            .post_json(&config.issues_url(), &payload.document, Some(&config.token))
            .await?;
        let created: CreatedIssue = response.json().await.map_err(|err| {
            DispatchError::new(
                DispatchErrorKind::MalformedResponse,
                err.without_url().to_string(),
            )
        })?;
        Ok(Some(format!("issue #{}", created.number)))
    }

    async fn send_email(
        &self,
        config: &EmailConfig,
        payload: &RenderedPayload,
    ) -> Result<Option<String>, DispatchError> {
        self.post_json(&config.send_url(), &payload.document, Some(&config.api_key))
            .await?;
        Ok(Some(format!("email to {}", config.to)))
    }
}

/// Appends one JSON line to the notification log.
async fn append_to_log(
    config: &FileConfig,
    payload: &RenderedPayload,
) -> Result<Option<String>, DispatchError> {
    tokio::fs::create_dir_all(&config.output_dir).await?;
    let path: PathBuf = config.output_dir.join(NOTIFICATION_LOG_FILE);

    let mut line: String = serde_json::to_string(&payload.document)?;
    line.push('\n');

    let mut file: tokio::fs::File = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;

    Ok(Some(path.display().to_string()))
}
