use std::time::Duration;

/// Limits how often the runtime loop spins.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use ratatui_runtime::FramePacer;
///
/// let pacer = FramePacer::from_rate(100.0);
/// assert_eq!(pacer.min_frame_time(), Duration::from_millis(10));
/// assert_eq!(pacer.remaining(Duration::from_millis(4)), Some(Duration::from_millis(6)));
/// assert_eq!(pacer.remaining(Duration::from_millis(12)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    min_frame_time: Duration,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::from_rate(FramePacer::DEFAULT_RATE)
    }
}

impl FramePacer {
    pub const DEFAULT_RATE: f64 = 60.0;

    /// Frame time used when the requested rate is out of range.
    pub const FALLBACK_FRAME_TIME: Duration = Duration::from_nanos(200_000);

    const MIN_RATE: f64 = 1.0;
    const MAX_RATE: f64 = 4999.9;

    /// Creates a pacer from a frame rate (FPS).
    ///
    /// Rates at or below 1, at or above 4999.9, and NaN fall back to
    /// [`Self::FALLBACK_FRAME_TIME`].
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_rate(fps: f64) -> Self {
        let min_frame_time = if fps.is_nan() || fps <= Self::MIN_RATE || fps >= Self::MAX_RATE {
            Self::FALLBACK_FRAME_TIME
        } else {
            Duration::from_nanos((1e9 / fps) as u64)
        };
        Self { min_frame_time }
    }

    #[must_use]
    pub fn min_frame_time(&self) -> Duration {
        self.min_frame_time
    }

    /// Time left in the frame budget after `elapsed`, if any.
    #[must_use]
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.min_frame_time
            .checked_sub(elapsed)
            .filter(|rest| !rest.is_zero())
    }
}
