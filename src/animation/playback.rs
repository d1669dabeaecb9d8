use std::time::Duration;

use crate::foundation::core::Frame;

/// Interval between frames when replaying an animation.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(120);

/// Maps elapsed time onto a frame list, holding on the last frame.
///
/// This is the replay contract for presentation layers; it never sleeps.
#[derive(Clone, Copy, Debug)]
pub struct Playback<'a> {
    frames: &'a [Frame],
    interval: Duration,
}

impl<'a> Playback<'a> {
    /// Playback at [`FRAME_INTERVAL`].
    pub fn new(frames: &'a [Frame]) -> Self {
        Self {
            frames,
            interval: FRAME_INTERVAL,
        }
    }

    /// Override the frame interval. A zero interval jumps straight to the last frame.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Interval between frames.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Index shown after `elapsed`, or `None` when there are no frames.
    pub fn frame_index_at(&self, elapsed: Duration) -> Option<usize> {
        let last = self.frames.len().checked_sub(1)?;
        if self.interval.is_zero() {
            return Some(last);
        }
        let step = elapsed.as_nanos() / self.interval.as_nanos();
        Some(usize::try_from(step).map_or(last, |s| s.min(last)))
    }

    /// Frame shown after `elapsed`.
    pub fn frame_at(&self, elapsed: Duration) -> Option<&'a Frame> {
        let frames = self.frames;
        self.frame_index_at(elapsed).map(|i| &frames[i])
    }

    /// Time until the last frame has been shown for one full interval.
    pub fn total_duration(&self) -> Duration {
        let n = u32::try_from(self.frames.len()).unwrap_or(u32::MAX);
        self.interval.saturating_mul(n)
    }

    /// Whether every frame has had its turn.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_duration()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/playback.rs"]
mod tests;
