//! Page-URL parsing and canonical title derivation.
//!
//! Turns a Commons file page URL into the namespaced title the query API
//! expects, plus the human-readable display name. Pure string work; the one
//! failure mode is a URL without the `File:` marker segment.

mod title;

use std::fmt;

pub use title::{display_name_from_title, extract_canonical_title};

/// Namespace marker a file page URL must contain.
pub const FILE_MARKER: &str = "File:";

/// Canonical address of one media file, derived once from a raw URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentifier {
    /// Namespace-prefixed, underscore-joined title (`File:Some_name.jpg`).
    pub canonical_title: String,
    /// Title without the namespace prefix, underscores restored to spaces.
    pub display_name: String,
}

/// Input URL carried no `File:` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateError {
    pub url: String,
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a media file page URL (no File: segment): {}", self.url)
    }
}

impl std::error::Error for LocateError {}

/// Derives the [`ResourceIdentifier`] for a file page URL.
///
/// Takes everything after the `File:` marker, truncated at the first `#` or
/// `?`, and joins words with underscores. No network access; same input
/// always yields the same identifier.
///
/// # Examples
///
/// - `locate("https://commons.wikimedia.org/wiki/File:Cat March.jpg#mw")` →
///   canonical `File:Cat_March.jpg`, display `Cat March.jpg`
pub fn locate(page_url: &str) -> Result<ResourceIdentifier, LocateError> {
    let canonical_title =
        extract_canonical_title(page_url).ok_or_else(|| LocateError {
            url: page_url.to_string(),
        })?;
    let display_name = display_name_from_title(&canonical_title);

    Ok(ResourceIdentifier {
        canonical_title,
        display_name,
    })
}
