use std::num::NonZeroU32;

use aws_config::retry::RetryConfig;

/// Number of attempts used when the configured retry count is not positive.
pub const DEFAULT_RETRY_COUNT: NonZeroU32 = match NonZeroU32::new(10) {
    Some(count) => count,
    None => unreachable!(),
};

/// Retry policy for requests issued by the resulting client.
///
/// Wraps the configured attempt count together with the fallback used when
/// that count is zero or negative. The fallback is never zero, so
/// [`Retryer::max_attempts`] is always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retryer {
    retry_count: i32,
    fallback: NonZeroU32,
}

impl Retryer {
    /// Creates a retryer that falls back to [`DEFAULT_RETRY_COUNT`].
    pub fn new(retry_count: i32) -> Self {
        Self::with_default(retry_count, DEFAULT_RETRY_COUNT)
    }

    /// Creates a retryer with an explicit fallback attempt count.
    pub fn with_default(retry_count: i32, fallback: NonZeroU32) -> Self {
        Retryer {
            retry_count,
            fallback,
        }
    }

    /// The maximum number of attempts before a request is treated as failed.
    pub fn max_attempts(&self) -> u32 {
        if self.retry_count > 0 {
            self.retry_count as u32
        } else {
            self.fallback.get()
        }
    }

    /// Standard (exponential backoff) retry configuration bounded by [`Self::max_attempts`].
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig::standard().with_max_attempts(self.max_attempts())
    }
}

impl Default for Retryer {
    fn default() -> Self {
        Retryer::new(0)
    }
}
