use std::time::Duration;

/// Classification for retry policy.
///
/// | Class | Retried by [`RetryPolicy`]? |
/// |-------|-----------------------------|
/// | `Never` | No |
/// | `WithBackoff` | Yes, if the policy allows retries |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - bad request, bad key, or a local failure.
    /// The request is fundamentally invalid and retrying won't help.
    Never,

    /// Transient failure (timeout, connection refused, rate limit).
    /// May succeed if the same request is sent again after a delay.
    WithBackoff,
}

/// Retry policy for REST requests.
///
/// Disabled by default: a failed request is returned to the caller as-is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    /// Number of additional attempts after the first one.
    pub max_retries: u32,
    /// Delay before the first retry; doubled for every further retry.
    pub initial_backoff: Duration,
    /// Upper bound for a single delay.
    pub max_backoff: Duration,
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }

    /// A policy retrying up to `max_retries` times with exponential backoff.
    pub fn exponential(max_retries: u32, initial_backoff: Duration) -> Self {
        Self {
            max_retries,
            initial_backoff,
            ..Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_retries > 0
    }

    /// Delay before retry number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        backoff_delay(self.initial_backoff, self.max_backoff, attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Reconnect policy for WebSocket streams.
///
/// Disabled by default: when the server closes the socket the stream stays
/// disconnected until `start()` is called again.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReconnectPolicy {
    /// Maximum reconnect attempts per outage. `0` disables reconnecting.
    pub max_attempts: u32,
    /// Delay before the first reconnect attempt; doubled for every further attempt.
    pub initial_delay: Duration,
    /// Upper bound for a single delay.
    pub max_delay: Duration,
}

impl ReconnectPolicy {
    pub fn disabled() -> Self {
        Self {
            max_attempts: 0,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
        }
    }

    pub fn exponential(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            ..Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_attempts > 0
    }

    /// Delay before reconnect attempt number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        backoff_delay(self.initial_delay, self.max_delay, attempt)
    }
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}

fn backoff_delay(initial: Duration, max: Duration, attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    initial.saturating_mul(1u32 << exponent).min(max)
}
