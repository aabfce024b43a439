//! Delay and retry-with-backoff helpers.

use std::future::Future;
use std::time::Duration;

#[cfg(test)]
#[path = "retry_test.rs"]
mod retry_test;

/// Sleep for `ms` milliseconds.
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Run `op` up to `attempts` times with exponential back-off between
/// failures (`base_delay`, doubled each retry). Returns the first success
/// or the last error once attempts are exhausted.
///
/// # Errors
///
/// Returns the error from the final attempt.
pub async fn retry<T, E, F, Fut>(attempts: u32, base_delay: Duration, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= attempts => return Err(err),
            Err(_) => {
                let backoff = base_delay * 2u32.saturating_pow(attempt - 1);
                tokio::time::sleep(backoff).await;
                attempt += 1;
            }
        }
    }
}
