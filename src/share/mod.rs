//! Host capabilities for sharing and saving comparisons.
//!
//! The calculation layer never touches these. A host injects:
//! - [`FileSink`]: saves an exported document
//! - [`ShareSheet`]: the platform share dialog
//! - [`Clipboard`]: fallback when sharing is unavailable or declined

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use crate::export::{ExportError, SnapshotExport, SNAPSHOT_CONTENT_TYPE};
use crate::models::ComparisonSet;

/// Notice shown after the link was copied instead of shared.
pub const LINK_COPIED_NOTICE: &str = "Link kopyalandı!";

/// Notice shown when neither sharing nor copying worked.
pub const SHARE_FAILED_NOTICE: &str = "Link could not be shared or copied";

/// Errors reported by share capabilities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("Share dialog is not available")]
    Unavailable,

    #[error("Share was cancelled or rejected: {0}")]
    Rejected(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardFailed(String),
}

/// Saves exported documents.
pub trait FileSink {
    fn write(&self, filename: &str, content_type: &str, bytes: &[u8]) -> std::io::Result<()>;
}

/// Platform share dialog.
#[async_trait]
pub trait ShareSheet: Send + Sync {
    fn is_available(&self) -> bool;

    async fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Platform clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// What gets handed to the share dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Payload for a comparison, naming the first two players.
    pub fn for_comparison(set: &ComparisonSet, app_label: &str, page_url: &Url) -> Self {
        let players = set.players();
        let (a, b) = (&players[0], &players[1]);

        Self {
            title: format!("{} vs {} - {}", a.name, b.name, app_label),
            text: format!(
                "{} ({}) vs {} ({}) karşılaştırması",
                a.name, a.team, b.name, b.team
            ),
            url: page_url.to_string(),
        }
    }
}

/// Locator of the comparison page for a set, `?ids=1,2,...` appended to the base.
pub fn comparison_url(base: &Url, set: &ComparisonSet) -> Url {
    let ids = set
        .players()
        .iter()
        .map(|p| p.id.to_string())
        .collect::<Vec<_>>()
        .join(",");

    let mut url = base.clone();
    url.query_pairs_mut().clear().append_pair("ids", &ids);
    url
}

/// How a share request ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ShareOutcome {
    Shared,
    CopiedToClipboard { notice: String },
    Failed { notice: String },
}

/// Share a comparison, falling back to copying its url.
///
/// Never fails: a failure of both capabilities is reported as
/// [`ShareOutcome::Failed`] with a notice for the user.
pub async fn share_comparison(
    payload: &SharePayload,
    sheet: &dyn ShareSheet,
    clipboard: &dyn Clipboard,
) -> ShareOutcome {
    if sheet.is_available() {
        match sheet.share(payload).await {
            Ok(()) => {
                info!("Shared comparison: {}", payload.title);
                return ShareOutcome::Shared;
            }
            Err(e) => warn!("Share failed, copying link instead: {}", e),
        }
    } else {
        debug!("Share dialog unavailable, copying link");
    }

    match clipboard.write_text(&payload.url).await {
        Ok(()) => ShareOutcome::CopiedToClipboard {
            notice: LINK_COPIED_NOTICE.to_string(),
        },
        Err(e) => {
            warn!("Clipboard fallback failed: {}", e);
            ShareOutcome::Failed {
                notice: SHARE_FAILED_NOTICE.to_string(),
            }
        }
    }
}

/// Serialize an export and hand it to a sink.
pub fn deliver_export(export: &SnapshotExport, sink: &dyn FileSink) -> Result<(), ExportError> {
    let json = export.document.to_json_pretty()?;
    sink.write(&export.filename, SNAPSHOT_CONTENT_TYPE, json.as_bytes())
        .map_err(|source| ExportError::Sink {
            filename: export.filename.clone(),
            source,
        })?;

    info!(
        "Exported comparison of {} players to {}",
        export.document.players.len(),
        export.filename
    );
    Ok(())
}
