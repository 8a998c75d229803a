//! Retry policy for outbound service calls.
//!
//! External services are called with a bounded timeout and retried with
//! exponential backoff on transient failures (transport errors, 5xx).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for retry behavior on transient service errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before the first retry, in milliseconds.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Cap on the delay between retries, in milliseconds.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_max_attempts()  -> u32 { 2 }
fn default_base_delay_ms() -> u64 { 250 }
fn default_max_delay_ms()  -> u64 { 2_000 }

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl RetryConfig {
    /// No retries; used by tests that expect the first failure.
    pub fn none() -> Self {
        Self { max_attempts: 1, ..Self::default() }
    }

    /// Delay before retry number `retry` (1-based), doubling each time.
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 1u64 << retry.saturating_sub(1).min(16);
        let ms = self.base_delay_ms.saturating_mul(factor).min(self.max_delay_ms);
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_single_retry() {
        assert_eq!(RetryConfig::default().max_attempts, 2);
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let cfg = RetryConfig { max_attempts: 5, base_delay_ms: 100, max_delay_ms: 350 };
        assert_eq!(cfg.delay_for(1), Duration::from_millis(100));
        assert_eq!(cfg.delay_for(2), Duration::from_millis(200));
        assert_eq!(cfg.delay_for(3), Duration::from_millis(350));
        assert_eq!(cfg.delay_for(40), Duration::from_millis(350));
    }
}
