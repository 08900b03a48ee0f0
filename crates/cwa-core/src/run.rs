//! The attribution trigger boundary: locate → fetch → compose → install.

use thiserror::Error;

use crate::config::CwaConfig;
use crate::fetch::{self, FetchError};
use crate::locator::{self, LocateError};
use crate::session::{AttributionSession, CurrentResult};

/// Everything one attribution run can fail with.
#[derive(Debug, Error)]
pub enum AttributionError {
    #[error(transparent)]
    NotAFileUrl(#[from] LocateError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// A newer run completed first; this run's response was discarded.
    #[error("superseded by a newer attribution run")]
    Superseded,
    /// Anything outside the taxonomy above.
    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl AttributionError {
    /// Collapses the taxonomy into the user-visible message. Validation
    /// failures get their own wording; everything fetch-shaped shares one
    /// generic message that deliberately does not distinguish "file missing"
    /// from "transport broken".
    pub fn user_message(&self) -> String {
        match self {
            AttributionError::NotAFileUrl(_) => {
                "Please enter a valid Wikimedia Commons file URL.".to_string()
            }
            AttributionError::Fetch(_) | AttributionError::Superseded => {
                "Could not fetch attribution data. Please check the URL or if the file exists."
                    .to_string()
            }
            AttributionError::Unexpected(detail) => {
                format!("An unexpected error occurred: {detail}")
            }
        }
    }
}

/// Runs the whole pipeline for one page URL and installs the result in
/// `session`.
///
/// Validation happens before any network access: a URL without the file
/// marker fails fast as [`AttributionError::NotAFileUrl`]. On any failure
/// the session's previously installed result is left untouched. Blocking;
/// call from `spawn_blocking` in async code.
pub fn run_attribution(
    session: &mut AttributionSession,
    cfg: &CwaConfig,
    raw_url: &str,
) -> Result<CurrentResult, AttributionError> {
    let identifier = locator::locate(raw_url)?;
    let generation = session.begin();

    tracing::info!("fetching attribution for {}", identifier.canonical_title);
    let record = fetch::fetch_metadata(cfg, &identifier)?;

    session
        .complete(generation, record)
        .cloned()
        .ok_or(AttributionError::Superseded)
}
