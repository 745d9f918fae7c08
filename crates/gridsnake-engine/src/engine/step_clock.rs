/// Nanoseconds between two simulation steps (100 ms).
pub const STEP_INTERVAL_NANOS: u64 = 100_000_000;

/// Fixed-step gate on an external monotonic nanosecond clock.
///
/// The simulation advances at most once per call, and only when at least one
/// full interval elapsed since the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepClock {
    interval: u64,
    last_step: u64,
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new(STEP_INTERVAL_NANOS)
    }
}

impl StepClock {
    #[must_use]
    pub const fn new(interval_nanos: u64) -> Self {
        Self {
            interval: interval_nanos,
            last_step: 0,
        }
    }

    /// Tick of the most recent step.
    #[must_use]
    pub const fn last_step(&self) -> u64 {
        self.last_step
    }

    /// Records `tick` as the new step time if a full interval has elapsed.
    ///
    /// A tick earlier than the last step counts as no time elapsed.
    pub fn try_advance(&mut self, tick: u64) -> bool {
        if tick.saturating_sub(self.last_step) < self.interval {
            return false;
        }
        self.last_step = tick;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_after_one_interval() {
        let mut clock = StepClock::default();
        assert!(!clock.try_advance(0));
        assert!(!clock.try_advance(STEP_INTERVAL_NANOS - 1));
        assert!(clock.try_advance(STEP_INTERVAL_NANOS));
        assert_eq!(clock.last_step(), STEP_INTERVAL_NANOS);
    }

    #[test]
    fn test_interval_measured_from_last_step() {
        let mut clock = StepClock::new(10);
        assert!(clock.try_advance(15));
        assert!(!clock.try_advance(24));
        assert!(clock.try_advance(25));
        // A late call steps once, it does not catch up
        assert!(clock.try_advance(100));
        assert!(!clock.try_advance(105));
    }

    #[test]
    fn test_tick_going_backwards_does_not_step() {
        let mut clock = StepClock::new(10);
        assert!(clock.try_advance(50));
        assert!(!clock.try_advance(20));
        assert_eq!(clock.last_step(), 50);
    }
}
