use glam::Vec3;

// Scene layout and generation constants shared by the generators, the
// scheduler and the renderer.

// Camera depth range (world units along +Z)
pub const MAX_ZOOM: f32 = 2500.0; // fully zoomed out, start position
pub const MIN_ZOOM: f32 = 550.0; // fully zoomed in

// Perspective camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 20000.0;

// Background stars
pub const BACKGROUND_STAR_COUNT: usize = 15000;
pub const BACKGROUND_CUBE_SIDE: f32 = 15000.0;

// Galaxy arms
pub const GALAXY_ARM_COUNT: usize = 18000;
pub const GALAXY_ARM_BRANCHES: usize = 3;
pub const GALAXY_RADIUS: f32 = 550.0;
pub const GALAXY_SPIN: f32 = 0.012; // radians of twist per unit radius
pub const GALAXY_ARM_JITTER_XY: f32 = 30.0; // +/- in the disk plane
pub const GALAXY_ARM_JITTER_Z: f32 = 50.0; // +/- across the disk
pub const GALAXY_WARM_HEX: u32 = 0xffcc88; // inner arm color
pub const GALAXY_COOL_HEX: u32 = 0x3366ff; // outer arm color

// Galaxy core
pub const GALAXY_CORE_COUNT: usize = 5000;
pub const GALAXY_CORE_RADIUS: f32 = 100.0;
pub const GALAXY_CORE_BIAS: f32 = 2.5; // radius = u^BIAS * RADIUS
pub const GALAXY_CORE_HEX: u32 = 0xfff0dd;

// Constellation scatter targets
pub const SCATTER_RADIUS_MIN: f32 = 50.0;
pub const SCATTER_RADIUS_MAX: f32 = 400.0;
pub const SCATTER_JITTER_Z: f32 = 25.0;
pub const CONSTELLATION_DEFAULT_HEX: u32 = 0x4499ff;

// Point sizes (attenuated: on-screen px = size * viewport_h / 2 / depth)
pub const BACKGROUND_STAR_SIZE: f32 = 24.0;
pub const CONSTELLATION_STAR_SIZE: f32 = 38.0;
pub const GALAXY_ARM_SIZE: f32 = 8.0;
pub const GALAXY_CORE_SIZE: f32 = 24.0;

// Star sprite raster
pub const SPRITE_SIZE: u32 = 128;

/// sRGB transfer function inverse for one 0..1 channel.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Decode a `0xRRGGBB` sRGB literal into linear 0..1 RGB. Surfaces are sRGB,
/// so shaders work in linear space and the encode happens on write.
#[inline]
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    Vec3::new(channel(16), channel(8), channel(0))
}
