// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One run of the checker: fetch, evaluate, build, persist, select, dispatch.

use crate::error::CliError;
use crate::settings::Settings;
use crate::summary::{render_config_check, render_dry_run, render_summary};
use irwatch::{ComplianceReport, DeliveryDecision, delivery_decision, run_check};
use irwatch_notify::{Channel, ChannelKind, DispatchResult, Dispatcher, select_channel};
use irwatch_persistence::{PersistenceError, ReportStore, RosterSnapshot, RosterSource};
use std::path::PathBuf;
use time::OffsetDateTime;
use tracing::{info, warn};

/// What happened to the notification for a report.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// Delivery was switched off for this run.
    Suppressed,
    /// The report is clean and sending was not requested.
    NotRequired,
    /// No channel is configured and delivery was optional.
    Undeliverable,
    /// The channel declined to deliver this report by policy.
    Skipped(ChannelKind),
    /// Dry run; the result carries the payload that would have been sent.
    DryRun(DispatchResult),
    Delivered {
        channel: ChannelKind,
        receipt: Option<String>,
    },
}

/// The result of a successful compliance check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub report: ComplianceReport,
    pub report_path: PathBuf,
    pub delivery: Delivery,
}

/// Prints the configuration listing.
pub fn config_check(settings: &Settings) {
    println!("{}", render_config_check(settings));
}

/// Sends the connectivity test notification.
///
/// # Errors
///
/// Returns `Config` if no channel is configured, `Delivery` if the channel fails.
pub async fn send_test(
    settings: &Settings,
    now: OffsetDateTime,
) -> Result<DispatchResult, CliError> {
    let channel: Channel = select_channel(&settings.notify);
    if !channel.is_configured() && !settings.dispatch.dry_run {
        return Err(CliError::Config(String::from(
            "no notification channel is configured",
        )));
    }

    info!(channel = %channel.kind(), "Sending test notification");
    let result: DispatchResult = dispatcher(settings, channel.kind())?
        .send_test(&channel, now)
        .await;
    into_success(result)
}

/// Runs the compliance check and delivers the report.
///
/// # Errors
///
/// - `Validation` if no roster source is configured
/// - `Fetch` if the snapshot cannot be obtained or is unusable; nothing is written
/// - `Report` if the report cannot be saved
/// - `Config` if delivery is mandatory and no channel is configured
/// - `Delivery` if the selected channel fails; the report remains on disk
pub async fn check(settings: &Settings, now: OffsetDateTime) -> Result<CheckOutcome, CliError> {
    let source: &RosterSource = settings.roster_source.as_ref().ok_or_else(|| {
        CliError::Validation(String::from(
            "no roster source configured, set IR_ROSTER_FILE or IR_ROSTER_URL",
        ))
    })?;

    info!(source = %source.describe(), "Starting IR compliance check");
    let snapshot: RosterSnapshot = source.fetch(settings.week).await?;
    let week: u32 = snapshot.resolve_week(settings.week)?;

    let report: ComplianceReport = run_check(
        week,
        &snapshot.teams,
        &settings.rules,
        snapshot.league.clone(),
        now,
    )
    .map_err(|err| CliError::Fetch(PersistenceError::MalformedSnapshot(err.to_string())))?;

    let store: ReportStore = ReportStore::new(&settings.output_dir);
    let report_path: PathBuf = store.save(&report).await?;
    println!("{}", render_summary(&report));
    println!("Report saved to: {}", report_path.display());
    match store.list().await {
        Ok(stored) => info!(
            dir = %store.dir().display(),
            stored = stored.len(),
            "Report archive updated"
        ),
        Err(err) => warn!(error = %err, "Could not list stored reports"),
    }

    let delivery: Delivery = deliver(settings, &report).await?;
    Ok(CheckOutcome {
        report,
        report_path,
        delivery,
    })
}

async fn deliver(settings: &Settings, report: &ComplianceReport) -> Result<Delivery, CliError> {
    if settings.suppress_delivery {
        println!("\n📧 Notification skipped (--no-email)");
        return Ok(Delivery::Suppressed);
    }

    let decision: DeliveryDecision = delivery_decision(report, settings.always_send);
    if !decision.should_send() {
        println!("\n📨 No notification sent (no violations found and not forced)");
        info!("No notification sent, report is clean");
        return Ok(Delivery::NotRequired);
    }

    let channel: Channel = select_channel(&settings.notify);
    info!(channel = %channel.kind(), "Selected notification channel");

    if !channel.is_configured() && !settings.dispatch.dry_run {
        if decision.is_mandatory() {
            return Err(CliError::Config(format!(
                "{} violation(s) found but no notification channel is configured; report kept on disk",
                report.total_violations
            )));
        }
        warn!("No notification channel configured, clean report not delivered");
        return Ok(Delivery::Undeliverable);
    }

    let result: DispatchResult = dispatcher(settings, channel.kind())?
        .dispatch(report, &channel)
        .await;
    let result: DispatchResult = into_success(result)?;

    if settings.dispatch.dry_run {
        return Ok(Delivery::DryRun(result));
    }
    if result.skipped {
        println!("\n📨 {} skipped for a clean report", result.channel);
        return Ok(Delivery::Skipped(result.channel));
    }

    println!("\n📨 Notification sent successfully via {}!", result.channel);
    Ok(Delivery::Delivered {
        channel: result.channel,
        receipt: result.receipt,
    })
}

fn dispatcher(settings: &Settings, channel: ChannelKind) -> Result<Dispatcher, CliError> {
    Dispatcher::new(settings.dispatch).map_err(|source| CliError::Delivery { channel, source })
}

/// Turns a failed dispatch into an error and prints dry-run payloads.
fn into_success(result: DispatchResult) -> Result<DispatchResult, CliError> {
    if let Some(source) = result.error {
        return Err(CliError::Delivery {
            channel: result.channel,
            source,
        });
    }
    if let Some(payload) = result.payload.as_ref().filter(|_| !result.delivered) {
        println!("{}", render_dry_run(payload));
    }
    Ok(result)
}
