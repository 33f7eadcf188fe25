// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification delivery for compliance reports.
//!
//! A run resolves exactly one [`Channel`] from an immutable [`NotifyConfig`]
//! and hands it to the [`Dispatcher`], which renders the report for that
//! channel and delivers it. Delivery failures come back as data in a
//! [`DispatchResult`]; the dispatcher never retries.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod channel;
mod config;
mod dispatch;
mod error;
mod message;
mod payload;

#[cfg(test)]
mod tests;

pub use channel::{Channel, ChannelKind, channel_statuses, select_channel};
pub use config::{
    DEFAULT_EMAIL_API_URL, DEFAULT_EMAIL_FROM, DEFAULT_ISSUE_API_URL, DEFAULT_SLACK_CHANNEL,
    DiscordConfig, EmailConfig, FileConfig, IssueTrackerConfig, NotifyConfig, SlackConfig,
};
pub use dispatch::{DEFAULT_TIMEOUT, DispatchOptions, DispatchResult, Dispatcher};
pub use error::{DispatchError, DispatchErrorKind};
pub use message::{Message, Severity, render_message, render_test_message};
pub use payload::{NOTIFICATION_LOG_FILE, RenderedPayload, render_payload};
