//! Retry policy for the external-data fetchers.

use std::time::Duration;

/// Retry policy for one fetcher call.
///
/// `max_attempts` counts total tries, not retries after the first failure:
/// `Fixed { max_attempts: 3, .. }` issues at most three requests with a
/// constant pause between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Single attempt, no retry.
    None,
    /// Up to `max_attempts` tries with a fixed pause between them.
    Fixed {
        /// Total number of tries.
        max_attempts: usize,
        /// Pause between consecutive tries.
        interval: Duration,
    },
}

impl RetryPolicy {
    /// Creates a policy with no retries.
    pub fn none() -> Self {
        RetryPolicy::None
    }

    /// Creates a fixed-interval retry policy.
    pub fn fixed(max_attempts: usize, interval: Duration) -> Self {
        RetryPolicy::Fixed {
            max_attempts,
            interval,
        }
    }

    /// Total number of tries this policy allows (at least one).
    pub fn attempts(&self) -> usize {
        match self {
            RetryPolicy::None => 1,
            RetryPolicy::Fixed { max_attempts, .. } => (*max_attempts).max(1),
        }
    }

    /// Pause inserted before the next try.
    pub fn delay(&self) -> Duration {
        match self {
            RetryPolicy::None => Duration::ZERO,
            RetryPolicy::Fixed { interval, .. } => *interval,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::None
    }
}
