//! Bounded retry with a fixed delay.
//!
//! A small combinator over any fallible async operation; the deck client
//! applies it to single-card draws. No jitter, no exponential growth —
//! the provider either recovers within a few hundred milliseconds or the
//! caller is told to try the whole operation again.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

/// How many times to attempt an operation and how long to pause between
/// attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

impl Default for RetryPolicy {
    /// Three attempts, 200ms apart — the card-draw policy.
    fn default() -> Self {
        Self::new(3, Duration::from_millis(200))
    }
}

/// Run `op` until it succeeds or the policy is exhausted, sleeping the
/// fixed delay between attempts. Returns the last error on exhaustion.
///
/// `max_attempts` is clamped to at least one so the operation always
/// runs.
pub async fn retry<T, E, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let attempts = policy.max_attempts.max(1);
    let mut last_err = None;
    for attempt in 1..=attempts {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!("attempt {}/{} failed: {}", attempt, attempts, err);
                last_err = Some(err);
                if attempt < attempts {
                    tokio::time::sleep(policy.delay).await;
                }
            }
        }
    }
    // attempts >= 1, so at least one error was recorded
    Err(last_err.expect("retry ran at least once"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn quick_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_first_attempt_success_does_not_retry() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, String> = retry(quick_policy(3), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(7) }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result: Result<&str, String> = retry(quick_policy(3), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err("flaky".to_string())
                } else {
                    Ok("drawn")
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), "drawn");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_last_error() {
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = retry(quick_policy(3), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move { Err(format!("failure {}", n)) }
        })
        .await;
        assert_eq!(result.unwrap_err(), "failure 2");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_attempts_clamps_to_one() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, String> = retry(quick_policy(0), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(1) }
        })
        .await;
        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
