pub mod camera;
pub mod cloud;
pub mod constants;
pub mod constellation;
pub mod parallax;
pub mod params;
pub mod scene;
pub mod schedule;
pub mod sprite;
pub mod zoom;

pub use constants::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
pub static LINES_WGSL: &str = include_str!("../../shaders/lines.wgsl");
