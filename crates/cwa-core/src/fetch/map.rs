//! Maps one response page into the normalized attribution record.

use std::collections::HashMap;

use crate::locator::ResourceIdentifier;
use crate::markup;
use crate::record::{AttributionRecord, Thumbnail, UNKNOWN_FIELD};

use super::error::FetchError;
use super::response::{MetaField, PageInfo};

/// Normalizes a page object into an [`AttributionRecord`].
///
/// Every metadata field is independently optional upstream; absent or empty
/// values land on the `"N/A"` sentinel so composition never branches on
/// missing-vs-present.
pub(crate) fn map_record(
    id: &ResourceIdentifier,
    page: PageInfo,
) -> Result<AttributionRecord, FetchError> {
    let not_found = || FetchError::NotFound {
        title: id.canonical_title.clone(),
    };

    if page.missing.is_some() {
        return Err(not_found());
    }
    let info = page
        .imageinfo
        .and_then(|infos| infos.into_iter().next())
        .ok_or_else(not_found)?;

    let meta = info
        .extmetadata
        .ok_or_else(|| FetchError::MissingMetadataBlock {
            title: id.canonical_title.clone(),
        })?;

    let author_formatted = field(&meta, "Artist").unwrap_or_else(unknown);
    let author_plain = plain_author(&author_formatted);

    let creation_date_raw = field(&meta, "DateTimeOriginal")
        .or_else(|| field(&meta, "DateTime"))
        .unwrap_or_else(unknown);
    let creation_date_cleaned = markup::clean_date_value(&creation_date_raw);

    let thumbnail = match (info.thumburl, info.thumbwidth) {
        (Some(url), Some(width)) => Some(Thumbnail { url, width }),
        _ => None,
    };

    Ok(AttributionRecord {
        file_title: id.canonical_title.clone(),
        file_name: id.display_name.clone(),
        source_page_url: info
            .descriptionurl
            .filter(|u| !u.is_empty())
            .unwrap_or_else(unknown),
        thumbnail,
        author_formatted,
        author_plain,
        creation_date_raw,
        creation_date_cleaned,
        license_short_name: field(&meta, "LicenseShortName").unwrap_or_else(unknown),
        license_url: field(&meta, "LicenseUrl").unwrap_or_else(unknown),
        license_components: components(&meta),
    })
}

fn unknown() -> String {
    UNKNOWN_FIELD.to_string()
}

/// String value of one extended-metadata field; empty counts as absent.
fn field(meta: &HashMap<String, MetaField>, key: &str) -> Option<String> {
    meta.get(key)
        .and_then(MetaField::as_str)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn plain_author(author_formatted: &str) -> String {
    if author_formatted == UNKNOWN_FIELD {
        return unknown();
    }
    let plain = markup::strip_tags(author_formatted).trim().to_string();
    if plain.is_empty() {
        unknown()
    } else {
        plain
    }
}

/// License component codes, lowercased and trimmed; empty entries dropped.
fn components(meta: &HashMap<String, MetaField>) -> Vec<String> {
    field(meta, "LicenseComponent")
        .map(|raw| {
            raw.split(',')
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
