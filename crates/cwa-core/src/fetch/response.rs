//! Typed structures for the imageinfo query response.
//!
//! The API returns a map of opaque page ids to page objects; every member
//! below is independently optional, mirroring how loosely the platform
//! populates extended metadata.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub query: Option<QueryBlock>,
}

impl ApiResponse {
    /// The request scopes to exactly one title, so exactly one page entry is
    /// expected; take it without assuming anything about page-id keys or
    /// their ordering.
    pub fn into_single_page(self) -> Option<PageInfo> {
        self.query?.pages.into_values().next()
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QueryBlock {
    #[serde(default)]
    pub pages: HashMap<String, PageInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageInfo {
    /// With `format=json` a missing page carries an empty-string member;
    /// presence alone marks the page missing.
    #[serde(default)]
    pub missing: Option<String>,
    #[serde(default)]
    pub imageinfo: Option<Vec<ImageInfo>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageInfo {
    #[serde(default)]
    pub extmetadata: Option<HashMap<String, MetaField>>,
    #[serde(default)]
    pub descriptionurl: Option<String>,
    #[serde(default)]
    pub thumburl: Option<String>,
    #[serde(default)]
    pub thumbwidth: Option<u32>,
}

/// One extended-metadata field. The platform wraps each value in an object
/// with `value`/`source` members; values are usually strings but not always.
#[derive(Debug, Deserialize)]
pub(crate) struct MetaField {
    #[serde(default)]
    pub value: serde_json::Value,
}

impl MetaField {
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}
