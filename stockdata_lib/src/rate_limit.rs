//! Sliding-window rate limiter for pacing upstream requests.
//!
//! The upstream free tier allows 5 calls per minute. The multi-symbol
//! quote path paces itself at one request per 12-second window, the
//! spacing that stays under that quota; the budget and window are
//! configurable for other callers and for tests.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Spacing window matching the free-tier quota (5 calls per minute).
pub const QUOTE_SPACING: Duration = Duration::from_secs(12);

/// Sliding-window rate limiter.
///
/// Tracks timestamps of recent requests in a `VecDeque` behind a tokio
/// Mutex. When the window is full, `acquire()` sleeps until the oldest
/// entry expires. There is no retry logic anywhere behind this: a call
/// that fails after acquiring a slot fails once.
pub struct RateLimiter {
    timestamps: Mutex<VecDeque<Instant>>,
    max_requests: u64,
    window_duration: Duration,
}

impl RateLimiter {
    /// Create a rate limiter with explicit budget and window.
    pub fn new(max_requests: u64, window_duration: Duration) -> Self {
        Self {
            timestamps: Mutex::new(VecDeque::with_capacity(max_requests as usize)),
            max_requests,
            window_duration,
        }
    }

    /// Wait until a request slot is available, then record the timestamp.
    ///
    /// If the sliding window is full, computes how long until the oldest
    /// entry expires, drops the lock, sleeps, then re-acquires and retries.
    pub async fn acquire(&self) {
        loop {
            let now = Instant::now();
            let mut ts = self.timestamps.lock().await;

            // Evict entries older than the window
            let cutoff = now - self.window_duration;
            while ts.front().is_some_and(|&t| t < cutoff) {
                ts.pop_front();
            }

            if (ts.len() as u64) < self.max_requests {
                ts.push_back(now);
                return;
            }

            // Window is full -- compute sleep duration
            let oldest = *ts.front().expect("non-empty after length check");
            let expires_at = oldest + self.window_duration;
            let wait = expires_at.duration_since(now);

            // Drop lock before sleeping
            drop(ts);
            sleep(wait).await;
        }
    }

    /// Non-blocking snapshot of the remaining budget in the current window.
    ///
    /// Returns `None` if the lock is contended (callers should treat as
    /// "unknown").
    pub fn remaining_budget(&self) -> Option<u64> {
        match self.timestamps.try_lock() {
            Ok(ts) => {
                let now = Instant::now();
                let cutoff = now - self.window_duration;
                let active = ts.iter().filter(|&&t| t >= cutoff).count() as u64;
                Some(self.max_requests.saturating_sub(active))
            }
            Err(_) => None,
        }
    }

    /// The configured max requests per window.
    pub fn max_requests(&self) -> u64 {
        self.max_requests
    }
}

impl Default for RateLimiter {
    /// One request per spacing window: sequential callers end up 12
    /// seconds apart, the behavior the upstream free-tier quota requires.
    fn default() -> Self {
        Self::new(1, QUOTE_SPACING)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn acquire_under_limit() {
        let limiter = RateLimiter::new(10, Duration::from_secs(60));

        // Should all return immediately when under budget
        for _ in 0..10 {
            limiter.acquire().await;
        }

        assert_eq!(limiter.remaining_budget(), Some(0));
    }

    #[tokio::test]
    async fn acquire_at_limit_blocks() {
        tokio::time::pause();

        let limiter = Arc::new(RateLimiter::new(3, Duration::from_secs(10)));

        // Fill the window
        for _ in 0..3 {
            limiter.acquire().await;
        }

        // Next acquire should block -- spawn it and verify it doesn't
        // complete immediately
        let limiter_clone = Arc::clone(&limiter);
        let handle = tokio::spawn(async move {
            limiter_clone.acquire().await;
        });

        // Advance time just short of expiry -- task should still be pending
        tokio::time::advance(Duration::from_secs(9)).await;
        tokio::task::yield_now().await;
        assert!(!handle.is_finished());

        // Advance past the window -- task should complete
        tokio::time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn window_expiry() {
        tokio::time::pause();

        let limiter = RateLimiter::new(2, Duration::from_secs(5));

        limiter.acquire().await;
        limiter.acquire().await;
        assert_eq!(limiter.remaining_budget(), Some(0));

        // Advance past the window
        tokio::time::advance(Duration::from_secs(6)).await;

        // Should have full budget again
        assert_eq!(limiter.remaining_budget(), Some(2));

        // And acquire should work immediately
        limiter.acquire().await;
        assert_eq!(limiter.remaining_budget(), Some(1));
    }

    #[tokio::test]
    async fn remaining_budget_decrements() {
        let limiter = RateLimiter::new(5, Duration::from_secs(60));

        assert_eq!(limiter.remaining_budget(), Some(5));
        limiter.acquire().await;
        assert_eq!(limiter.remaining_budget(), Some(4));
        limiter.acquire().await;
        assert_eq!(limiter.remaining_budget(), Some(3));
    }

    #[tokio::test]
    async fn default_enforces_quote_spacing() {
        tokio::time::pause();

        let limiter = RateLimiter::default();
        assert_eq!(limiter.max_requests(), 1);

        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;

        // Three sequential acquisitions span at least two full windows.
        assert!(start.elapsed() >= QUOTE_SPACING * 2);
    }
}
