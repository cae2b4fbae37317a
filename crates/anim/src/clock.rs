use std::time::{Duration, Instant};

/// Timing information for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Seconds since the previous frame, clamped to `Clock::MAX_DELTA`.
    pub delta: f32,
}

/// Frame clock: elapsed time since start plus the delta between frames.
///
/// Deltas are clamped so a stalled window (dragging, breakpoint) does not
/// produce one huge step.
#[derive(Debug, Clone)]
pub struct Clock {
    start: Instant,
    previous: Instant,
}

impl Clock {
    pub const MAX_DELTA: Duration = Duration::from_millis(100);

    pub fn start() -> Self {
        Self::start_at(Instant::now())
    }

    pub fn start_at(now: Instant) -> Self {
        Self {
            start: now,
            previous: now,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let delta = now.saturating_duration_since(self.previous).min(Self::MAX_DELTA);
        self.previous = now;
        FrameTime {
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
            delta: delta.as_secs_f32(),
        }
    }
}
