//! Title extraction and display-name reconstruction.

use super::FILE_MARKER;

/// Pulls the canonical `File:`-prefixed title out of a page URL.
///
/// Returns `None` when the URL has no `File:` segment. The remainder after
/// the marker is truncated at the first `#` or `?`, then word-joined with
/// underscores. Percent-encoding passes through untouched; the query API
/// accepts both forms.
pub fn extract_canonical_title(page_url: &str) -> Option<String> {
    let after = page_url.split_once(FILE_MARKER).map(|(_, rest)| rest)?;

    let name = after
        .split(['#', '?'])
        .next()
        .unwrap_or("")
        .replace(' ', "_");

    Some(format!("{FILE_MARKER}{name}"))
}

/// Human-readable name for a canonical title: prefix removed, underscores
/// converted back to spaces.
pub fn display_name_from_title(canonical_title: &str) -> String {
    canonical_title
        .strip_prefix(FILE_MARKER)
        .unwrap_or(canonical_title)
        .replace('_', " ")
}
