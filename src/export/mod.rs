//! Comparison snapshot export.
//!
//! Builds the portable JSON document for a comparison and derives its
//! filename. Writing the document somewhere is left to a [`FileSink`].
//!
//! [`FileSink`]: crate::share::FileSink

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ComparisonSet, StatBlock};

/// Document type tag.
pub const SNAPSHOT_TYPE: &str = "player_comparison";

/// Content type of the serialized document.
pub const SNAPSHOT_CONTENT_TYPE: &str = "application/json";

/// Errors that can occur while exporting a snapshot.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write {filename}: {source}")]
    Sink {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

/// Source of the export timestamp.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// One player inside a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPlayer {
    pub name: String,
    pub team: String,
    pub position: String,
    pub stats: StatBlock,
}

/// Portable document describing a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSnapshot {
    pub players: Vec<SnapshotPlayer>,
    /// ISO-8601, millisecond precision, UTC
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ComparisonSnapshot {
    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A snapshot document plus the filename it should be saved under.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotExport {
    pub document: ComparisonSnapshot,
    pub filename: String,
}

/// Build the snapshot document and filename for a comparison.
pub fn export_snapshot(set: &ComparisonSet, clock: &dyn Clock) -> SnapshotExport {
    let players = set
        .players()
        .iter()
        .map(|p| SnapshotPlayer {
            name: p.name.clone(),
            team: p.team.clone(),
            position: p.position.clone(),
            stats: p.stats.clone(),
        })
        .collect();

    let document = ComparisonSnapshot {
        players,
        timestamp: clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
        kind: SNAPSHOT_TYPE.to_string(),
    };

    SnapshotExport {
        filename: snapshot_filename(set),
        document,
    }
}

/// `comparison_<name>_vs_<name>....json`, whitespace in names replaced by `_`.
pub fn snapshot_filename(set: &ComparisonSet) -> String {
    let names: Vec<String> = set
        .players()
        .iter()
        .map(|p| sanitize_name(&p.name))
        .collect();
    format!("comparison_{}.json", names.join("_vs_"))
}

fn sanitize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}
