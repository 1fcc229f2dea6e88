use thiserror::Error;

/// Every way a proxy request can fail.
///
/// Callers treat all variants alike: the failure is logged and the page keeps
/// whatever it was showing.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("proxy base URL is not configured")]
    NotConfigured,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("proxy returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response body: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
