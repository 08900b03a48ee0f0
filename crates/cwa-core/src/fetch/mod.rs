//! Remote metadata retrieval from the MediaWiki query API.
//!
//! One GET per invocation, no retries, no request caching; a failed call
//! surfaces immediately through the [`FetchError`] taxonomy. Runs in the
//! current thread; call from `spawn_blocking` if used from async code.

mod error;
mod map;
mod query;
mod response;

pub use error::{FetchError, TransportError};

use std::time::Duration;

use crate::config::CwaConfig;
use crate::locator::ResourceIdentifier;
use crate::record::AttributionRecord;

use response::ApiResponse;

/// Fetches and normalizes attribution metadata for one canonical title.
pub fn fetch_metadata(
    cfg: &CwaConfig,
    id: &ResourceIdentifier,
) -> Result<AttributionRecord, FetchError> {
    let url = query::build_query_url(&cfg.api_endpoint, &id.canonical_title, cfg.thumb_width)
        .map_err(TransportError::from)?;
    tracing::debug!("querying {}", url);

    let body = perform_get(cfg, url.as_str())?;
    let parsed: ApiResponse =
        serde_json::from_slice(&body).map_err(TransportError::from)?;
    let page = parsed
        .into_single_page()
        .ok_or(TransportError::Shape("no pages in query response"))?;

    map::map_record(id, page)
}

/// GET `url` and return the whole response body.
fn perform_get(cfg: &CwaConfig, url: &str) -> Result<Vec<u8>, TransportError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.useragent(cfg.user_agent())?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.request_timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(TransportError::Status(code));
    }
    Ok(body)
}
