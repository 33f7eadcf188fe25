// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::snapshot::RosterSnapshot;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Where the roster snapshot comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// A JSON document on disk.
    File(PathBuf),
    /// A JSON endpoint, queried with `?week=N` when a week is requested.
    Http {
        url: String,
        token: Option<String>,
        timeout: Duration,
    },
}

impl std::fmt::Debug for RosterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Http { url, token, timeout } => f
                .debug_struct("Http")
                .field("url", url)
                .field("token", &token.as_ref().map(|_| "<redacted>"))
                .field("timeout", timeout)
                .finish(),
        }
    }
}

impl RosterSource {
    /// Short description safe to log.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => format!("file {}", path.display()),
            Self::Http { .. } => String::from("HTTP endpoint"),
        }
    }

    /// Loads the snapshot.
    ///
    /// # Arguments
    ///
    /// * `week` - The week to ask the source for, if any
    ///
    /// # Errors
    ///
    /// Returns a fetch error if the source cannot be read or does not hold a
    /// valid snapshot.
    pub async fn fetch(&self, week: Option<u32>) -> Result<RosterSnapshot, PersistenceError> {
        let snapshot: RosterSnapshot = match self {
            Self::File(path) => {
                debug!(path = %path.display(), "Reading roster snapshot");
                let text: String = tokio::fs::read_to_string(path).await.map_err(|err| {
                    PersistenceError::SourceUnreachable(format!("{}: {err}", path.display()))
                })?;
                RosterSnapshot::from_json(&text)?
            }
            Self::Http {
                url,
                token,
                timeout,
            } => fetch_http(url, token.as_deref(), *timeout, week).await?,
        };

        info!(
            source = %self.describe(),
            teams = snapshot.teams.len(),
            current_week = ?snapshot.current_week,
            "Fetched roster snapshot"
        );
        Ok(snapshot)
    }
}

async fn fetch_http(
    url: &str,
    token: Option<&str>,
    timeout: Duration,
    week: Option<u32>,
) -> Result<RosterSnapshot, PersistenceError> {
    let client: reqwest::Client = reqwest::Client::builder().timeout(timeout).build()?;

    let mut request: reqwest::RequestBuilder = client.get(url);
    if let Some(week) = week {
        request = request.query(&[("week", week)]);
    }
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response: reqwest::Response = request.send().await?;
    let status: reqwest::StatusCode = response.status();
    if !status.is_success() {
        return Err(PersistenceError::SourceStatus {
            status: status.as_u16(),
        });
    }

    let text: String = response.text().await?;
    RosterSnapshot::from_json(&text)
}
