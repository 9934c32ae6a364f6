use foundation::time::Time;

/// Fixed-delay retry policy for out-of-band acquisition (GPS fixes).
///
/// Deliberately simple: a constant delay, no jitter, no backoff growth.
/// Attempts are bounded so a device that never fixes gives up with a
/// user-visible state instead of polling forever.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RetryPolicy {
    pub delay_s: f64,
    /// `None` means unbounded.
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay_s: 3.0,
            max_attempts: Some(20),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RetryDecision {
    /// Try again once engine time reaches the given instant.
    RetryAt(Time),
    /// Attempt budget is spent; surface the failure.
    GiveUp,
}

/// Per-acquisition retry bookkeeping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RetryState {
    policy: RetryPolicy,
    failures: u32,
}

impl RetryState {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            failures: 0,
        }
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Record one failed attempt and decide what happens next.
    pub fn record_failure(&mut self, now: Time) -> RetryDecision {
        self.failures += 1;
        if let Some(max) = self.policy.max_attempts {
            if self.failures >= max {
                return RetryDecision::GiveUp;
            }
        }
        RetryDecision::RetryAt(now.offset_s(self.policy.delay_s))
    }

    /// Reset the attempt budget (used when the user explicitly retries).
    pub fn reset(&mut self) {
        self.failures = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{RetryDecision, RetryPolicy, RetryState};
    use foundation::time::Time;

    #[test]
    fn schedules_fixed_delay() {
        let mut state = RetryState::new(RetryPolicy::default());
        let decision = state.record_failure(Time(10.0));
        assert_eq!(decision, RetryDecision::RetryAt(Time(13.0)));
        assert_eq!(state.failures(), 1);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let policy = RetryPolicy {
            delay_s: 3.0,
            max_attempts: Some(2),
        };
        let mut state = RetryState::new(policy);
        assert_eq!(
            state.record_failure(Time::ZERO),
            RetryDecision::RetryAt(Time(3.0))
        );
        assert_eq!(state.record_failure(Time(3.0)), RetryDecision::GiveUp);
    }

    #[test]
    fn unbounded_policy_never_gives_up() {
        let policy = RetryPolicy {
            delay_s: 1.0,
            max_attempts: None,
        };
        let mut state = RetryState::new(policy);
        for i in 0..100 {
            match state.record_failure(Time(i as f64)) {
                RetryDecision::RetryAt(_) => {}
                RetryDecision::GiveUp => panic!("unbounded policy gave up"),
            }
        }
    }

    #[test]
    fn reset_restores_the_attempt_budget() {
        let policy = RetryPolicy {
            delay_s: 1.0,
            max_attempts: Some(2),
        };
        let mut state = RetryState::new(policy);
        let _ = state.record_failure(Time::ZERO);
        state.reset();
        assert_eq!(
            state.record_failure(Time(5.0)),
            RetryDecision::RetryAt(Time(6.0))
        );
    }
}
