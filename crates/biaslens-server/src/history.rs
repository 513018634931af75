//! Append-only score-history log.
//!
//! One JSON record per line. The log is never rewritten or compacted;
//! malformed lines are skipped on read, matching the tolerance of the
//! pipeline's other parsers.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::AsyncWriteExt;

/// Stored prefix length for the analyzed text.
const TEXT_PREFIX_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot record a score for empty text")]
    EmptyText,
}

/// One recorded analysis outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// First 50 characters of the analyzed text.
    pub text: String,
    pub bias_score: f64,
    pub timestamp: DateTime<Utc>,
}

pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Appends one record. Blank text is rejected before touching the file.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::EmptyText`] for blank input and
    /// [`HistoryError::Io`] when the log cannot be written.
    pub async fn append(&self, text: &str, bias_score: f64) -> Result<(), HistoryError> {
        if text.trim().is_empty() {
            return Err(HistoryError::EmptyText);
        }

        let record = ScoreRecord {
            text: text.chars().take(TEXT_PREFIX_CHARS).collect(),
            bias_score,
            timestamp: Utc::now(),
        };
        // Serializing a struct of plain fields cannot fail.
        let mut line = serde_json::to_string(&record).unwrap_or_default();
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        Ok(())
    }

    /// Reads all recorded scores, oldest first.
    ///
    /// A missing log file yields an empty history; lines that fail to parse
    /// are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Io`] for any failure other than the file not
    /// existing.
    pub async fn read(&self) -> Result<Vec<ScoreRecord>, HistoryError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ScoreRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed history line");
                }
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
