/// Frame smoothing and interaction tuning constants.
///
/// These constants express intended behavior (gains, smoothing factors,
/// per-frame increments) and keep magic numbers out of the handlers.
// Zoom input gains (depth units per input unit)
pub const WHEEL_ZOOM_GAIN: f32 = 2.2;
pub const TOUCH_ZOOM_GAIN: f32 = 4.0;

// Per-frame exponential smoothing factor of camera depth toward its target
pub const ZOOM_SMOOTHING: f32 = 0.05;

// Parallax: pointer offset from viewport center (px) -> tilt target (rad)
pub const POINTER_PARALLAX_SCALE: f32 = 0.0003;
pub const TOUCH_PARALLAX_SCALE: f32 = 0.0005;

// Per-frame smoothing factor of scene tilt toward the pointer offset
pub const TILT_SMOOTHING: f32 = 0.04;

// Galaxy spin about its normal (rad per frame)
pub const GALAXY_SPIN_PER_FRAME: f32 = 0.0008;

// Twinkle angular speeds (rad per second)
pub const BACKGROUND_TWINKLE_RATE: f32 = 2.0;
pub const CONSTELLATION_TWINKLE_RATE: f32 = 3.5;

// Opacity pulse: base +/- amplitude
pub const TWINKLE_BASE: f32 = 0.7;
pub const TWINKLE_AMPLITUDE: f32 = 0.3;

// Peak opacity of constellation outlines
pub const LINE_OPACITY_PEAK: f32 = 0.4;

// Backing store density cap
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// DOM
pub const CANVAS_ID: &str = "sky";
