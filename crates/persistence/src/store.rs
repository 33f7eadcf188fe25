// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use irwatch::ComplianceReport;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

/// Prefix of every stored report file name.
pub const REPORT_FILE_PREFIX: &str = "ir_compliance_week_";

const STAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]_[hour][minute][second]");

/// Writes one JSON file per compliance report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file name a report is stored under, e.g.
    /// `ir_compliance_week_06_20251016_123045.json`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the timestamp cannot be formatted.
    pub fn file_name(report: &ComplianceReport) -> Result<String, PersistenceError> {
        let stamp: String = report
            .generated_at
            .format(STAMP_FORMAT)
            .map_err(|err| PersistenceError::SerializationError(err.to_string()))?;
        Ok(format!("{REPORT_FILE_PREFIX}{:02}_{stamp}.json", report.week))
    }

    /// Persists a report, creating the directory if needed.
    ///
    /// Existing files are never overwritten; a colliding name gets a numeric
    /// suffix. A report that cannot be written completely is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized or written.
    pub async fn save(&self, report: &ComplianceReport) -> Result<PathBuf, PersistenceError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let mut json: String = serde_json::to_string_pretty(report)?;
        json.push('\n');
        let file_name: String = Self::file_name(report)?;
        let stem: &str = file_name.trim_end_matches(".json");

        let mut attempt: u32 = 0;
        loop {
            let path: PathBuf = if attempt == 0 {
                self.dir.join(&file_name)
            } else {
                self.dir.join(format!("{stem}_{attempt}.json"))
            };

            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => {
                    let written: std::io::Result<()> = write_contents(file, json.as_bytes()).await;
                    discard_on_error(&path, written).await?;
                    info!(path = %path.display(), "Saved compliance report");
                    return Ok(path);
                }
                Err(err) if err.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Reads a stored report back.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a report.
    pub async fn load(path: &Path) -> Result<ComplianceReport, PersistenceError> {
        let text: String = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Lists stored report files, oldest name first.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    pub async fn list(&self) -> Result<Vec<PathBuf>, PersistenceError> {
        let mut entries: tokio::fs::ReadDir = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path: PathBuf = entry.path();
            if is_report_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

fn is_report_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(REPORT_FILE_PREFIX))
}

async fn write_contents(mut file: tokio::fs::File, contents: &[u8]) -> std::io::Result<()> {
    file.write_all(contents).await?;
    file.flush().await
}

/// Removes `path` if writing it failed, so a truncated report is never listed.
///
/// # Errors
///
/// Returns the original write error.
pub async fn discard_on_error(
    path: &Path,
    written: std::io::Result<()>,
) -> Result<(), PersistenceError> {
    if let Err(err) = written {
        if let Err(cleanup) = tokio::fs::remove_file(path).await {
            warn!(path = %path.display(), error = %cleanup, "Could not remove partial report");
        }
        return Err(err.into());
    }
    Ok(())
}
