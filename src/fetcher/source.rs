use crate::constants::COVER_PATH_SUFFIX;
use crate::errors::AppResult;
use crate::models::CoverDate;
use bytes::Bytes;
use reqwest::StatusCode;
use std::fmt;
use url::Url;

/// Why a single download attempt failed.
///
/// Both classes are retried identically; the distinction exists so logs and
/// tests can see the cause instead of a swallowed exception.
#[derive(Debug)]
pub enum AttemptError {
    /// The request never completed (DNS failure, connection reset, timeout, ...)
    Network(String),
    /// The server answered with something other than 200 OK
    Status(StatusCode),
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptError::Network(msg) => write!(f, "request failed: {msg}"),
            AttemptError::Status(status) => write!(f, "unexpected status: {status}"),
        }
    }
}

/// Builds the source URL of the scan for a given date.
///
/// The path is `{base}/{year}/{month}/{day}/nytfrontpage/scan.pdf` with
/// month and day zero-padded to two digits.
///
/// # Errors
///
/// Returns `UrlError` if the configured base does not form a valid URL.
pub fn cover_url(base: &str, date: CoverDate) -> AppResult<Url> {
    let url = format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        date.path_segments(),
        COVER_PATH_SUFFIX
    );
    Ok(Url::parse(&url)?)
}

/// Performs one GET against the scan URL.
///
/// Only a 200 response counts as success. Any other status is an
/// [`AttemptError::Status`], so a not-yet-published scan (404) is handled
/// the same way as a server error and left to the retry loop.
pub(crate) async fn attempt_download(
    client: &reqwest::Client,
    url: &Url,
) -> Result<Bytes, AttemptError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| AttemptError::Network(e.to_string()))?;

    if response.status() != StatusCode::OK {
        return Err(AttemptError::Status(response.status()));
    }

    response
        .bytes()
        .await
        .map_err(|e| AttemptError::Network(e.to_string()))
}
