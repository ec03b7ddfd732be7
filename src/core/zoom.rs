use super::constants::{MAX_ZOOM, MIN_ZOOM};
use crate::constants::{TOUCH_ZOOM_GAIN, WHEEL_ZOOM_GAIN, ZOOM_SMOOTHING};

/// Camera depth state driven by wheel and vertical touch drags.
///
/// Both `target` and `current` stay within `[MIN_ZOOM, MAX_ZOOM]`: input
/// moves `target` (clamped), and `step` eases `current` toward it.
#[derive(Clone, Debug)]
pub struct ZoomController {
    target: f32,
    current: f32,
    last_touch_y: f32,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self {
            target: MAX_ZOOM,
            current: MAX_ZOOM,
            last_touch_y: 0.0,
        }
    }
}

#[inline]
pub fn clamp_depth(depth: f32) -> f32 {
    depth.clamp(MIN_ZOOM, MAX_ZOOM)
}

impl ZoomController {
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    fn nudge(&mut self, amount: f32) {
        if amount.is_finite() {
            self.target = clamp_depth(self.target + amount);
        }
    }

    /// Positive `delta_y` (scrolling down) pulls the camera back.
    pub fn on_wheel(&mut self, delta_y: f32) {
        self.nudge(delta_y * WHEEL_ZOOM_GAIN);
    }

    pub fn on_touch_start(&mut self, y: f32) {
        if y.is_finite() {
            self.last_touch_y = y;
        }
    }

    /// A positive `last_y - y` (finger moving up) pulls the camera back.
    pub fn on_touch_move(&mut self, y: f32) {
        if !y.is_finite() {
            return;
        }
        self.nudge((self.last_touch_y - y) * TOUCH_ZOOM_GAIN);
        self.last_touch_y = y;
    }

    /// One frame of first-order smoothing of `current` toward `target`.
    pub fn step(&mut self) -> f32 {
        self.current = clamp_depth(self.current + (self.target - self.current) * ZOOM_SMOOTHING);
        self.current
    }
}
