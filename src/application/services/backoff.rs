use std::time::Duration;

/// Delay schedule for the status poll loop.
///
/// `wait_budget` bounds the cumulative time slept across the whole loop, not
/// the size of a single step; a delay is only taken when it still fits in
/// the remaining budget.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub initial_delay: Duration,
    pub wait_budget: Duration,
    pub backoff_factor: f64,
    pub max_delay: Duration,
    pub max_throttle_delay: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(10),
            wait_budget: Duration::from_secs(300),
            backoff_factor: 1.5,
            max_delay: Duration::from_secs(60),
            max_throttle_delay: Duration::from_secs(120),
        }
    }
}

/// Backoff state for one poll loop: the current delay and how much of the
/// budget has been consumed.
#[derive(Debug, Clone)]
pub struct Backoff {
    policy: PollPolicy,
    delay: Duration,
    slept: Duration,
}

impl Backoff {
    pub fn new(policy: PollPolicy) -> Self {
        Self {
            policy,
            delay: policy.initial_delay,
            slept: Duration::ZERO,
        }
    }

    /// Next delay to sleep, or `None` once the budget is exhausted. Charges
    /// the returned delay against the budget.
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.slept + self.delay > self.policy.wait_budget {
            return None;
        }
        self.slept += self.delay;
        Some(self.delay)
    }

    /// Normal backoff step after observing a still-running job.
    pub fn advance(&mut self) {
        self.delay = self
            .delay
            .mul_f64(self.policy.backoff_factor)
            .min(self.policy.max_delay);
    }

    /// Throttled by the service: grow faster, under a higher cap, without
    /// taking a normal backoff step.
    pub fn throttled(&mut self) {
        self.delay = (self.delay * 2).min(self.policy.max_throttle_delay);
    }

    pub fn current_delay(&self) -> Duration {
        self.delay
    }

    pub fn total_slept(&self) -> Duration {
        self.slept
    }
}
