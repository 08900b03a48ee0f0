//! Query-URL construction for the imageinfo request.

use url::Url;

/// Builds the single read request: image info plus extended descriptive
/// fields for exactly one title, with a bounded-width thumbnail reference.
/// `origin=*` keeps the endpoint CORS-unrestricted, matching the platform's
/// anonymous read contract.
pub(crate) fn build_query_url(
    endpoint: &str,
    canonical_title: &str,
    thumb_width: u32,
) -> Result<Url, url::ParseError> {
    let width = thumb_width.to_string();
    Url::parse_with_params(
        endpoint,
        &[
            ("action", "query"),
            ("prop", "imageinfo"),
            ("titles", canonical_title),
            ("iiprop", "extmetadata|url"),
            ("iiurlwidth", width.as_str()),
            ("iilimit", "1"),
            ("format", "json"),
            ("origin", "*"),
        ],
    )
}
