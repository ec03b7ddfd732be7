use crate::constants::{POINTER_PARALLAX_SCALE, TILT_SMOOTHING, TOUCH_PARALLAX_SCALE};

/// Normalized pointer offset from the viewport center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    /// Offset of `(px, py)` from the center of a `width` x `height` viewport,
    /// scaled by `scale`. Non-finite results keep the previous value.
    pub fn from_client(px: f32, py: f32, width: f32, height: f32, scale: f32) -> Option<Self> {
        let x = (px - width * 0.5) * scale;
        let y = (py - height * 0.5) * scale;
        (x.is_finite() && y.is_finite()).then_some(Self { x, y })
    }

    pub fn from_pointer(px: f32, py: f32, width: f32, height: f32) -> Option<Self> {
        Self::from_client(px, py, width, height, POINTER_PARALLAX_SCALE)
    }

    pub fn from_touch(px: f32, py: f32, width: f32, height: f32) -> Option<Self> {
        Self::from_client(px, py, width, height, TOUCH_PARALLAX_SCALE)
    }
}

/// Whole-scene rotation that lags behind the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneTilt {
    /// Rotation about X, follows the vertical offset.
    pub x: f32,
    /// Rotation about Y, follows the horizontal offset.
    pub y: f32,
}

impl SceneTilt {
    pub fn step_toward(&mut self, offset: PointerOffset) {
        self.x += (offset.y - self.x) * TILT_SMOOTHING;
        self.y += (offset.x - self.y) * TILT_SMOOTHING;
    }
}
