use std::time::Duration;

/// Attempt bound and backoff schedule for one query.
///
/// After `k` failed attempts the executor waits `base_delay * k²` before the
/// next one: 1, 4, 9, 16 time units with the default policy. There is no
/// jitter and no cap, and no wait follows the last attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 5, base_delay: Duration::from_secs(1) }
    }
}

impl RetryPolicy {
    /// `max_attempts` counts the first attempt and is at least 1.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self { max_attempts: max_attempts.max(1), base_delay }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Wait before the next attempt, given the number of attempts made so far.
    pub fn delay_after(&self, attempts: u32) -> Duration {
        self.base_delay.saturating_mul(attempts.saturating_mul(attempts))
    }

    /// Every wait of a fully failing run, in order.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        (1..self.max_attempts).map(move |attempts| self.delay_after(attempts))
    }

    /// Total time spent waiting when every attempt fails.
    pub fn total_delay(&self) -> Duration {
        self.delays().fold(Duration::ZERO, Duration::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 5);

        let delays: Vec<u64> = policy.delays().map(|d| d.as_secs()).collect();
        assert_eq!(delays, vec![1, 4, 9, 16]);
        assert_eq!(policy.total_delay(), Duration::from_secs(30));
    }

    #[test]
    fn test_delay_scales_with_base() {
        let policy = RetryPolicy::new(3, Duration::from_millis(10));
        assert_eq!(policy.base_delay(), Duration::from_millis(10));
        assert_eq!(policy.delay_after(1), Duration::from_millis(10));
        assert_eq!(policy.delay_after(2), Duration::from_millis(40));
        assert_eq!(policy.delays().count(), 2);
    }

    #[test]
    fn test_single_attempt_never_waits() {
        let policy = RetryPolicy::new(0, Duration::from_secs(1));
        assert_eq!(policy.max_attempts(), 1);
        assert_eq!(policy.delays().count(), 0);
        assert_eq!(policy.total_delay(), Duration::ZERO);
    }
}
