//! Linear backoff for rate-limited upstreams.

use std::time::Duration;

/// Retries on HTTP 429 only. The delay before retry `n` (1-based) is
/// `base + (n - 1) * step`: 200ms, 700ms, 1200ms with the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(200),
            step: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn should_retry(&self, status: u16, retries_done: u32) -> bool {
        status == 429 && retries_done < self.max_retries
    }

    /// Delay before the given 1-based retry.
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay + self.step * retry.saturating_sub(1)
    }
}
