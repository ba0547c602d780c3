use super::source::{attempt_download, cover_url, AttemptError};
use crate::config::ResolvedConfig;
use crate::errors::AppResult;
use crate::models::CoverDate;
use bytes::Bytes;
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

/// Downloads the front-page scan for a date, retrying until it succeeds.
///
/// Attempts are retried without an upper bound: the scan is sometimes
/// published late, so a daily batch run waits rather than failing. The delay
/// grows linearly with the number of failures (step, 2*step, 3*step, ...).
///
/// # Errors
///
/// Only a malformed configured base URL produces an error, before the first
/// attempt. Download failures never escape the retry loop.
pub async fn fetch_cover(
    client: &reqwest::Client,
    config: &ResolvedConfig,
    date: CoverDate,
) -> AppResult<Bytes> {
    let url = cover_url(&config.source_base_url, date)?;
    info!(url = %url, "Downloading front page scan");

    let step = Duration::from_secs(config.retry_step_secs);
    Ok(retry_until_success(step, || attempt_download(client, &url)).await)
}

/// Runs `attempt` until it succeeds, sleeping `failures * step` after each
/// failure. The counter starts at zero, so the first wait equals one step.
pub(crate) async fn retry_until_success<F, Fut>(step: Duration, mut attempt: F) -> Bytes
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Bytes, AttemptError>>,
{
    let mut failures: u32 = 0;
    loop {
        match attempt().await {
            Ok(body) => {
                if failures > 0 {
                    info!(attempts = failures + 1, "Download succeeded after retries");
                }
                return body;
            }
            Err(err) => {
                failures += 1;
                let delay = step * failures;
                warn!(
                    attempt = failures,
                    delay_secs = delay.as_secs(),
                    cause = %err,
                    "Download attempt failed, backing off"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::retry_until_success;
    use crate::fetcher::source::AttemptError;
    use bytes::Bytes;
    use reqwest::StatusCode;
    use std::cell::Cell;
    use std::time::Duration;
    use tokio::time::Instant;

    const STEP: Duration = Duration::from_secs(5);

    #[tokio::test(start_paused = true)]
    async fn immediate_success_returns_body_without_sleeping() {
        let start = Instant::now();

        let body = retry_until_success(STEP, || async {
            Ok::<_, AttemptError>(Bytes::from_static(b"%PDF-1.7"))
        })
        .await;

        assert_eq!(body, Bytes::from_static(b"%PDF-1.7"));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn backoff_grows_linearly_until_success() {
        let calls = Cell::new(0u32);
        let start = Instant::now();

        let body = retry_until_success(STEP, || {
            let n = calls.get();
            calls.set(n + 1);
            async move {
                if n < 2 {
                    Err(AttemptError::Status(StatusCode::NOT_FOUND))
                } else {
                    Ok(Bytes::from_static(b"scan"))
                }
            }
        })
        .await;

        // Two failures: slept 5s then 10s before the third attempt succeeded.
        assert_eq!(body, Bytes::from_static(b"scan"));
        assert_eq!(calls.get(), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(15));
    }

    #[tokio::test(start_paused = true)]
    async fn network_and_status_failures_are_retried_alike() {
        let calls = Cell::new(0u32);
        let start = Instant::now();

        let body = retry_until_success(STEP, || {
            let n = calls.get();
            calls.set(n + 1);
            async move {
                match n {
                    0 => Err(AttemptError::Network("connection reset".to_string())),
                    1 => Err(AttemptError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
                    2 => Err(AttemptError::Status(StatusCode::NOT_FOUND)),
                    _ => Ok(Bytes::from_static(b"late scan")),
                }
            }
        })
        .await;

        // Three failures: 5 + 10 + 15 seconds of backoff in total.
        assert_eq!(body, Bytes::from_static(b"late scan"));
        assert_eq!(calls.get(), 4);
        assert_eq!(start.elapsed(), Duration::from_secs(30));
    }
}
