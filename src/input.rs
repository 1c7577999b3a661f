//! Pointer tracking.
//!
//! The window only lets us poll the cursor once per frame, so `PointerTracker`
//! turns those samples into move/leave events for the driver.
//!
//! There is no leave event from the backend. On desktop the cursor position
//! stops updating once it exits the window, so a leave is only seen if a
//! sample outside the viewport was caught on the way out; otherwise the last
//! in-window point stays as the pointer until the cursor returns.

use macroquad::prelude::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Vec2),
    Left,
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    last_sample: Option<Vec2>,
    inside: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one cursor sample taken against a `width` x `height` viewport.
    ///
    /// The first sample only primes the tracker, since the cursor position is
    /// meaningless until the user actually moves it.
    pub fn sample(&mut self, pos: Vec2, width: f32, height: f32) -> Option<PointerEvent> {
        let last = self.last_sample.replace(pos)?;
        let in_view = pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= width && pos.y <= height;
        if !in_view {
            if self.inside {
                self.inside = false;
                return Some(PointerEvent::Left);
            }
            return None;
        }
        if pos != last {
            self.inside = true;
            return Some(PointerEvent::Moved(pos));
        }
        None
    }
}
