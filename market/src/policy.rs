use std::time::Duration;

use rand::Rng;

/// Pause inserted after every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingPolicy {
    pub min_delay: Duration,
    /// Upper bound of the random extra delay
    pub jitter: Duration,
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(100),
            jitter: Duration::from_millis(500),
        }
    }
}

impl PacingPolicy {
    /// Pick a delay in `min_delay..=min_delay + jitter`
    pub fn next_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        self.min_delay + Duration::from_millis(rng.gen_range(0..=jitter_ms))
    }

    pub async fn pause(&self) {
        let delay = self.next_delay(&mut rand::thread_rng());
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Sleeping before next request");
        tokio::time::sleep(delay).await;
    }
}

/// Bounded retry with exponential backoff for a single request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts including the first
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based)
    ///
    /// Never exceeds `max_delay`, whatever the multiplier.
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let max_secs = self.max_delay.as_secs_f64();
        let mut secs = self.initial_delay.as_secs_f64().min(max_secs);
        for _ in 1..retry {
            secs = (secs * self.backoff_multiplier).min(max_secs);
        }
        Duration::try_from_secs_f64(secs).unwrap_or(self.max_delay)
    }
}
