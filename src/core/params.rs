use super::constants::*;

/// Startup-time scene configuration: particle counts and sprite sizes.
///
/// `Default` matches the full desktop scene. `compact()` trades density for
/// fill rate on small screens; the visual narrative is unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub background_count: usize,
    pub arm_count: usize,
    pub core_count: usize,
    pub background_size: f32,
    pub constellation_size: f32,
    pub arm_size: f32,
    pub core_size: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            background_count: BACKGROUND_STAR_COUNT,
            arm_count: GALAXY_ARM_COUNT,
            core_count: GALAXY_CORE_COUNT,
            background_size: BACKGROUND_STAR_SIZE,
            constellation_size: CONSTELLATION_STAR_SIZE,
            arm_size: GALAXY_ARM_SIZE,
            core_size: GALAXY_CORE_SIZE,
        }
    }
}

/// CSS width below which the compact preset is used.
pub const COMPACT_VIEWPORT_MAX_CSS_PX: f64 = 768.0;

impl SceneParams {
    pub fn compact() -> Self {
        let full = Self::default();
        Self {
            background_count: full.background_count * 2 / 3,
            arm_count: full.arm_count / 2,
            core_count: full.core_count / 2,
            arm_size: full.arm_size * 1.25,
            ..full
        }
    }

    /// Pick a preset for a viewport of the given CSS width.
    pub fn for_viewport_width(css_width: f64) -> Self {
        if css_width.is_finite() && css_width > 0.0 && css_width < COMPACT_VIEWPORT_MAX_CSS_PX {
            Self::compact()
        } else {
            Self::default()
        }
    }

    pub fn total_points(&self) -> usize {
        self.background_count + self.arm_count + self.core_count
    }
}
