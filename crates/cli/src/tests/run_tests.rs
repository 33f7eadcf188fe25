// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{CLEAN_SNAPSHOT, VIOLATION_SNAPSHOT, args_with_snapshot, base_args, create_test_time};
use crate::Args;
use crate::error::{CliError, EXIT_FAILURE, EXIT_VALIDATION};
use crate::run::{CheckOutcome, Delivery, check, send_test};
use crate::settings::Settings;
use crate::summary::render_dry_run;
use irwatch_notify::{ChannelKind, DispatchResult, NOTIFICATION_LOG_FILE, RenderedPayload};
use irwatch_persistence::{PersistenceError, ReportStore};
use std::path::Path;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run(args: &Args) -> Result<CheckOutcome, CliError> {
    let settings: Settings = Settings::from_args(args).unwrap();
    check(&settings, create_test_time()).await
}

async fn stored_reports(dir: &Path) -> usize {
    ReportStore::new(dir.join("data")).list().await.unwrap().len()
}

#[tokio::test]
async fn test_violations_are_saved_and_delivered_to_file() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = args_with_snapshot(dir.path(), VIOLATION_SNAPSHOT);

    let outcome: CheckOutcome = run(&args).await.unwrap();

    assert_eq!(outcome.report.week, 6);
    assert_eq!(outcome.report.total_violations, 2);
    assert_eq!(outcome.report.teams_with_violations, 2);
    assert!(outcome.report_path.exists());
    assert!(matches!(
        outcome.delivery,
        Delivery::Delivered {
            channel: ChannelKind::File,
            ..
        }
    ));
    assert!(
        dir.path()
            .join("notifications")
            .join(NOTIFICATION_LOG_FILE)
            .exists()
    );
}

#[tokio::test]
async fn test_requested_week_overrides_snapshot_week() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = Args {
        week: Some(2),
        ..args_with_snapshot(dir.path(), VIOLATION_SNAPSHOT)
    };

    let outcome: CheckOutcome = run(&args).await.unwrap();

    assert_eq!(outcome.report.week, 2);
    assert!(
        outcome
            .report_path
            .to_string_lossy()
            .contains("ir_compliance_week_02_")
    );
}

#[tokio::test]
async fn test_clean_report_is_not_sent_by_default() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = args_with_snapshot(dir.path(), CLEAN_SNAPSHOT);

    let outcome: CheckOutcome = run(&args).await.unwrap();

    assert_eq!(outcome.delivery, Delivery::NotRequired);
    assert!(!dir.path().join("notifications").exists());
    assert_eq!(stored_reports(dir.path()).await, 1);
}

#[tokio::test]
async fn test_clean_report_sent_when_always_send() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = Args {
        always_send: true,
        ..args_with_snapshot(dir.path(), CLEAN_SNAPSHOT)
    };

    let outcome: CheckOutcome = run(&args).await.unwrap();

    assert!(matches!(outcome.delivery, Delivery::Delivered { .. }));
    let log: String = std::fs::read_to_string(
        dir.path().join("notifications").join(NOTIFICATION_LOG_FILE),
    )
    .unwrap();
    assert!(log.contains("All Teams Compliant"));
}

#[tokio::test]
async fn test_dry_run_makes_no_network_call() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(0)
        .mount(&server)
        .await;
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = Args {
        dry_run: true,
        slack_webhook_url: Some(format!("{}/hooks/slack", server.uri())),
        ..args_with_snapshot(dir.path(), VIOLATION_SNAPSHOT)
    };

    let outcome: CheckOutcome = run(&args).await.unwrap();

    let result: DispatchResult = match outcome.delivery {
        Delivery::DryRun(result) => result,
        other => panic!("expected a dry run, got {other:?}"),
    };
    assert!(!result.delivered);
    assert_eq!(result.channel, ChannelKind::Slack);
    let payload: RenderedPayload = result.payload.unwrap();
    assert!(payload.message.body.contains("Quinn Questionable"));
    assert!(payload.message.body.contains("Pat Probable"));
    let printed: String = render_dry_run(&payload);
    assert!(printed.contains("Payload:"));
    assert!(printed.contains("\"username\": \"IR Compliance Bot\""));
    assert!(printed.contains("\"color\": \"danger\""));
}

#[tokio::test]
async fn test_unconfigured_channel_with_violations_fails_but_keeps_report() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = Args {
        file_notifications: false,
        ..args_with_snapshot(dir.path(), VIOLATION_SNAPSHOT)
    };

    let err: CliError = run(&args).await.unwrap_err();

    assert!(matches!(err, CliError::Config(_)));
    assert_eq!(err.exit_code(), EXIT_FAILURE);
    assert_eq!(stored_reports(dir.path()).await, 1);
}

#[tokio::test]
async fn test_unconfigured_channel_in_dry_run_succeeds() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = Args {
        file_notifications: false,
        dry_run: true,
        ..args_with_snapshot(dir.path(), VIOLATION_SNAPSHOT)
    };

    let outcome: CheckOutcome = run(&args).await.unwrap();

    assert!(matches!(outcome.delivery, Delivery::DryRun(_)));
}

#[tokio::test]
async fn test_unconfigured_channel_with_clean_forced_report_is_a_warning() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = Args {
        file_notifications: false,
        force_email: true,
        ..args_with_snapshot(dir.path(), CLEAN_SNAPSHOT)
    };

    let outcome: CheckOutcome = run(&args).await.unwrap();

    assert_eq!(outcome.delivery, Delivery::Undeliverable);
}

#[tokio::test]
async fn test_no_email_suppresses_delivery() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = Args {
        no_email: true,
        ..args_with_snapshot(dir.path(), VIOLATION_SNAPSHOT)
    };

    let outcome: CheckOutcome = run(&args).await.unwrap();

    assert_eq!(outcome.delivery, Delivery::Suppressed);
    assert!(!dir.path().join("notifications").exists());
}

#[tokio::test]
async fn test_delivery_failure_fails_run_but_keeps_report() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = Args {
        discord_webhook_url: Some(format!("{}/webhook", server.uri())),
        ..args_with_snapshot(dir.path(), VIOLATION_SNAPSHOT)
    };

    let err: CliError = run(&args).await.unwrap_err();

    assert!(matches!(
        err,
        CliError::Delivery {
            channel: ChannelKind::Discord,
            ..
        }
    ));
    assert_eq!(err.exit_code(), EXIT_FAILURE);
    assert_eq!(stored_reports(dir.path()).await, 1);
}

#[tokio::test]
async fn test_missing_roster_file_writes_nothing() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = Args {
        roster_file: Some(dir.path().join("absent.json")),
        ..base_args(dir.path())
    };

    let err: CliError = run(&args).await.unwrap_err();

    assert!(matches!(err, CliError::Fetch(_)));
    assert_eq!(err.exit_code(), EXIT_FAILURE);
    assert!(!dir.path().join("data").exists());
}

#[tokio::test]
async fn test_snapshot_without_team_name_is_a_fetch_error() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = args_with_snapshot(
        dir.path(),
        r#"{ "current_week": 2, "teams": [ { "team_id": "1", "team_name": " ", "manager": "Alex" } ] }"#,
    );

    let err: CliError = run(&args).await.unwrap_err();

    assert!(matches!(err, CliError::Fetch(_)));
    assert!(!dir.path().join("data").exists());
}

#[tokio::test]
async fn test_missing_roster_source_is_validation_error() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();

    let err: CliError = run(&base_args(dir.path())).await.unwrap_err();

    assert_eq!(err.exit_code(), EXIT_VALIDATION);
}

#[tokio::test]
async fn test_send_test_through_file_channel() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let settings: Settings = Settings::from_args(&base_args(dir.path())).unwrap();

    let result: DispatchResult = send_test(&settings, create_test_time()).await.unwrap();

    assert!(result.delivered);
    let log: String = std::fs::read_to_string(
        dir.path().join("notifications").join(NOTIFICATION_LOG_FILE),
    )
    .unwrap();
    assert!(log.contains("Test IR Compliance Notification"));
}

#[tokio::test]
async fn test_send_test_without_channel_is_config_error() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let args: Args = Args {
        file_notifications: false,
        ..base_args(dir.path())
    };
    let settings: Settings = Settings::from_args(&args).unwrap();

    let err: CliError = send_test(&settings, create_test_time()).await.unwrap_err();

    assert!(matches!(err, CliError::Config(_)));
}

#[test]
fn test_persistence_errors_map_to_fetch_or_report() {
    let unreachable: CliError =
        CliError::from(PersistenceError::SourceUnreachable(String::from("refused")));
    let missing_week: CliError = CliError::from(PersistenceError::MissingWeek);
    let write_failed: CliError = CliError::from(PersistenceError::Io(String::from("disk full")));

    assert!(matches!(unreachable, CliError::Fetch(_)));
    assert!(matches!(missing_week, CliError::Fetch(_)));
    assert!(matches!(write_failed, CliError::Report(_)));
    assert_eq!(write_failed.exit_code(), EXIT_FAILURE);
}
