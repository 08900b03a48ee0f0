//! Fetch error taxonomy: expected-missing vs transport failure.

use thiserror::Error;

/// HTTP or decoding failure while querying the platform. Covers
/// network-unreachable, non-success status, and bodies that do not parse
/// into the expected structure.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    #[error("HTTP {0}")]
    Status(u32),
    #[error("response body is not valid JSON: {0}")]
    Body(#[from] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),
    #[error("invalid query URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Outcome of one metadata fetch that did not yield a record.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Page marked missing, or no image-info block. The expected outcome
    /// for deleted, renamed, or never-existing files; not a transport fault.
    #[error("no image metadata for {title}")]
    NotFound { title: String },
    /// Page exists but carries no extended metadata block. Callers treat
    /// this the same as [`FetchError::NotFound`].
    #[error("no extended metadata for {title}")]
    MissingMetadataBlock { title: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
}
