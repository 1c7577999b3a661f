//! Frame clock driving the animation.
//!
//! Time is counted in frame units: one unit is one frame at 60 Hz, so a
//! display running at 120 Hz advances by roughly 0.5 per tick.

/// Ticks per second that make one frame unit.
pub const FRAMES_PER_SECOND: f32 = 60.0;

/// Longest step a single tick may take, in frame units (a 10 fps floor).
pub const MAX_DELTA: f32 = 6.0;

/// Converts wall-clock seconds into frame units.
pub fn seconds_to_frames(seconds: f32) -> f32 {
    seconds * FRAMES_PER_SECOND
}

#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    /// Kept in f64 so the sum keeps growing over multi-day runs.
    global_time: f64,
    delta: f32,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances by `delta` frame units, capped at `MAX_DELTA`.
    pub fn tick(&mut self, delta: f32) -> f32 {
        let delta = if delta.is_finite() {
            delta.clamp(0.0, MAX_DELTA)
        } else {
            0.0
        };
        self.delta = delta;
        self.global_time += delta as f64;
        self.frame_count += 1;
        delta
    }

    /// Sum of every delta so far; drives the connection pulse.
    #[inline]
    pub fn global_time(&self) -> f64 {
        self.global_time
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }
}
