//! Credit-line synthesis from a normalized attribution record.
//!
//! Pure and deterministic: the same record always composes to byte-identical
//! strings, which is what lets the session cache both renderings and serve
//! format toggles without re-deriving anything.

mod year;

use crate::markup;
use crate::record::AttributionRecord;

use year::extract_year;

/// Substituted when the cleaned creation date holds no 4-digit run.
pub const YEAR_UNKNOWN: &str = "Year Unknown";

/// Case-insensitive marker of a public-domain dedication license. Dedication
/// works are "marked", not "licensed under": no © and no year in the
/// formatted sentence.
const DEDICATION_MARKER: &str = "cc0";

const ICON_BASE_URL: &str = "https://mirrors.creativecommons.org/presskit/icons/";
const ICON_STYLE: &str = "style=\"max-width: 1em;max-height:1em;margin-left: .2em;\"";

/// Which rendering of the credit sentence to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditFormat {
    /// HTML with hyperlinks and license icons.
    Formatted,
    /// Markup-free text with an optional license-URL clause.
    Plain,
}

/// Both renderings of one attribution statement, derived together so a
/// format toggle never recomputes from the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditPair {
    pub formatted: String,
    pub plain: String,
}

impl CreditPair {
    pub fn from_record(record: &AttributionRecord) -> Self {
        Self {
            formatted: compose(record, CreditFormat::Formatted),
            plain: compose(record, CreditFormat::Plain),
        }
    }

    pub fn get(&self, format: CreditFormat) -> &str {
        match format {
            CreditFormat::Formatted => &self.formatted,
            CreditFormat::Plain => &self.plain,
        }
    }
}

/// Composes the credit sentence for `record` in the requested format.
pub fn compose(record: &AttributionRecord, format: CreditFormat) -> String {
    match format {
        CreditFormat::Formatted => compose_formatted(record),
        CreditFormat::Plain => compose_plain(record),
    }
}

fn compose_formatted(record: &AttributionRecord) -> String {
    let author = markup::retarget_anchors(&record.author_formatted);
    let file_link = linked(&record.file_name, &record.source_page_url);
    let license_link = linked(&record.license_short_name, &record.license_url);
    let icons = icon_markup(&record.license_components);

    if is_dedication(&record.license_short_name) {
        format!("{file_link} by {author} is marked {license_link}{icons}")
    } else {
        let year = extract_year(&record.creation_date_cleaned).unwrap_or(YEAR_UNKNOWN);
        format!("{file_link} © {year} by {author} is licensed under {license_link}{icons}")
    }
}

/// Plain text keeps the standard sentence shape for every license kind,
/// dedication included.
fn compose_plain(record: &AttributionRecord) -> String {
    let year = extract_year(&record.creation_date_cleaned).unwrap_or(YEAR_UNKNOWN);

    let mut credit = format!(
        "{} © {} by {} is licensed under {}.",
        record.file_name, year, record.author_plain, record.license_short_name
    );
    if AttributionRecord::is_known(&record.license_url) {
        credit.push_str(" To view a copy of this license, visit ");
        credit.push_str(&record.license_url);
    }

    // Last defensive pass over stray markup from source fields.
    markup::strip_tags(&credit).trim().to_string()
}

/// Label wrapped as a new-tab hyperlink, or the bare label when the URL is
/// the sentinel.
fn linked(label: &str, url: &str) -> String {
    if AttributionRecord::is_known(url) {
        format!("<a href=\"{url}\" target=\"_blank\">{label}</a>")
    } else {
        label.to_string()
    }
}

fn icon_markup(components: &[String]) -> String {
    components
        .iter()
        .map(|c| format!("<img src=\"{ICON_BASE_URL}{c}.svg\" alt=\"{c}\" {ICON_STYLE}>"))
        .collect()
}

fn is_dedication(license_short_name: &str) -> bool {
    license_short_name.to_lowercase().contains(DEDICATION_MARKER)
}
