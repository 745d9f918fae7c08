use std::time::Instant;

/// Source of monotonic timestamps in nanoseconds.
pub trait TickSource {
    fn now_ns(&self) -> u64;
}

/// Nanoseconds elapsed since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl TickSource for MonotonicClock {
    fn now_ns(&self) -> u64 {
        // Saturates after roughly 584 years of uptime
        u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}
