//! Retry Policy
//!
//! Exponential backoff with jitter for best-effort background pushes.

use crate::constants::{
    SYNC_INITIAL_DELAY_MS, SYNC_JITTER, SYNC_MAX_DELAY_MS, SYNC_MAX_RETRIES, SYNC_MULTIPLIER,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry configuration for the preference sync
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt (0 = single attempt, failures dropped)
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,
    /// Upper bound for any delay, in milliseconds
    pub max_delay_ms: u64,
    /// Multiplier for exponential backoff
    pub multiplier: f64,
    /// Jitter factor (0.0 - 1.0) to randomize delays
    pub jitter: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: SYNC_MAX_RETRIES,
            initial_delay_ms: SYNC_INITIAL_DELAY_MS,
            max_delay_ms: SYNC_MAX_DELAY_MS,
            multiplier: SYNC_MULTIPLIER,
            jitter: SYNC_JITTER,
        }
    }
}

impl RetryConfig {
    /// Policy that never retries
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Total attempts including the first one
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay before retry number `retry` (1-based); `None` once retries are exhausted
    pub fn delay_for(&self, retry: u32) -> Option<Duration> {
        if retry == 0 || retry > self.max_retries {
            return None;
        }

        let base_delay = self.initial_delay_ms as f64 * self.multiplier.powi((retry - 1) as i32);
        let capped_delay = base_delay.min(self.max_delay_ms as f64);

        let jitter_range = capped_delay * self.jitter.clamp(0.0, 1.0);
        let jitter = (rand_jitter() * 2.0 - 1.0) * jitter_range;
        let final_delay = (capped_delay + jitter).max(0.0) as u64;

        Some(Duration::from_millis(final_delay))
    }
}

/// Simple pseudo-random jitter (0.0 - 1.0)
fn rand_jitter() -> f64 {
    use std::time::SystemTime;
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    (nanos % 1000) as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_does_not_retry() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts(), 1);
        assert_eq!(config.delay_for(1), None);
    }

    #[test]
    fn delays_grow_and_stop_at_max_retries() {
        let config = RetryConfig {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 250,
            multiplier: 2.0,
            jitter: 0.0,
        };

        assert_eq!(config.delay_for(1), Some(Duration::from_millis(100)));
        assert_eq!(config.delay_for(2), Some(Duration::from_millis(200)));
        assert_eq!(config.delay_for(3), Some(Duration::from_millis(250)));
        assert_eq!(config.delay_for(4), None);
    }

    #[test]
    fn jitter_stays_within_range() {
        let config = RetryConfig {
            max_retries: 1,
            initial_delay_ms: 1000,
            jitter: 0.1,
            ..RetryConfig::default()
        };

        let delay = config.delay_for(1).expect("delay").as_millis();
        assert!((900..=1100).contains(&delay));
    }
}
