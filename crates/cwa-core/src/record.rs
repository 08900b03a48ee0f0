//! Normalized attribution metadata for a single Commons media file.

/// Sentinel for metadata fields the platform did not supply.
///
/// Every string field on [`AttributionRecord`] carries this value instead of
/// being absent, so downstream composition branches on sentinel-vs-value
/// only, never on missing-vs-present.
pub const UNKNOWN_FIELD: &str = "N/A";

/// Bounded-width thumbnail reference returned by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
}

/// Snapshot of remote metadata, normalized for credit composition.
///
/// Constructed once per successful fetch and held as the session's current
/// result until the next completed run supersedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionRecord {
    /// Canonical `File:`-prefixed, underscore-joined title.
    pub file_title: String,
    /// Human-readable file name (no namespace prefix, spaces restored).
    pub file_name: String,
    /// Description page URL on the platform, or the sentinel.
    pub source_page_url: String,
    /// Present only when the platform returned a scaled thumbnail; absence
    /// means "no image" to the presentation layer.
    pub thumbnail: Option<Thumbnail>,
    /// Author as supplied (may embed markup such as anchors).
    pub author_formatted: String,
    /// Author with all markup stripped.
    pub author_plain: String,
    /// Creation timestamp as supplied, before cleanup.
    pub creation_date_raw: String,
    /// Date-only form: markup stripped, parenthetical and comma-joined
    /// fragments truncated away.
    pub creation_date_cleaned: String,
    pub license_short_name: String,
    pub license_url: String,
    /// License component codes (`cc`, `by`, `sa`, ...), lowercased; empty
    /// when the platform supplied none.
    pub license_components: Vec<String>,
}

impl AttributionRecord {
    /// True when `field` holds a real value rather than the sentinel.
    pub fn is_known(field: &str) -> bool {
        field != UNKNOWN_FIELD
    }
}
