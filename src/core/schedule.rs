use super::constants::{MAX_ZOOM, MIN_ZOOM};
use crate::constants::{
    BACKGROUND_TWINKLE_RATE, CONSTELLATION_TWINKLE_RATE, LINE_OPACITY_PEAK, TWINKLE_AMPLITUDE,
    TWINKLE_BASE,
};

/// Zoom progress: 0 fully zoomed out (`MAX_ZOOM`), 1 fully zoomed in (`MIN_ZOOM`).
#[inline]
pub fn progress(depth: f32) -> f32 {
    let p = (MAX_ZOOM - depth) / (MAX_ZOOM - MIN_ZOOM);
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Cubic Hermite step: 0 at or below `start`, 1 at or above `end`.
#[inline]
pub fn ease(value: f32, start: f32, end: f32) -> f32 {
    if value <= start {
        return 0.0;
    }
    if value >= end {
        return 1.0;
    }
    let x = (value - start) / (end - start);
    x * x * (3.0 - 2.0 * x)
}

#[inline]
fn twinkle(time_sec: f32, rate: f32) -> f32 {
    TWINKLE_BASE + TWINKLE_AMPLITUDE * (time_sec * rate).sin()
}

/// Per-frame presentation parameters for every layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerVisibility {
    pub progress: f32,
    pub background: f32,
    pub constellation_points: f32,
    pub constellation_lines: f32,
    pub morph: f32,
    pub galaxy_core: f32,
    pub galaxy_arms: f32,
}

/// Map zoom progress and elapsed time to opacities and the morph fraction.
///
/// Narrative by depth: stars always, constellations fade in, outlines flash
/// through a mid band, shapes scatter, then the core and finally the arms.
pub fn visibility(progress: f32, time_sec: f32) -> LayerVisibility {
    let p = progress.clamp(0.0, 1.0);
    let lines = (ease(p, 0.3, 0.5) - ease(p, 0.6, 0.75)) * LINE_OPACITY_PEAK;
    LayerVisibility {
        progress: p,
        background: twinkle(time_sec, BACKGROUND_TWINKLE_RATE).clamp(0.0, 1.0),
        constellation_points: (ease(p, 0.0, 0.25)
            * twinkle(time_sec, CONSTELLATION_TWINKLE_RATE))
        .clamp(0.0, 1.0),
        constellation_lines: lines.clamp(0.0, 1.0),
        morph: ease(p, 0.55, 0.95),
        galaxy_core: ease(p, 0.6, 0.85),
        galaxy_arms: ease(p, 0.8, 1.0),
    }
}
