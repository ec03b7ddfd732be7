use super::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// A fixed-size set of points generated once at startup.
///
/// `colors` and `phases`, when present, have exactly one entry per position.
#[derive(Clone, Debug, Default)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub colors: Option<Vec<Vec3>>,
    pub phases: Option<Vec<f32>>,
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions as a flat `[x, y, z, x, y, z, ...]` buffer.
    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Colors as a flat `[r, g, b, ...]` buffer, if the cloud has colors.
    pub fn flat_colors(&self) -> Option<Vec<f32>> {
        self.colors
            .as_ref()
            .map(|cs| cs.iter().flat_map(|c| c.to_array()).collect())
    }

    /// Color for point `i`, falling back to `tint` for uncolored clouds.
    #[inline]
    pub fn color_or(&self, i: usize, tint: Vec3) -> Vec3 {
        self.colors
            .as_ref()
            .and_then(|cs| cs.get(i).copied())
            .unwrap_or(tint)
    }

    #[inline]
    pub fn phase_or_zero(&self, i: usize) -> f32 {
        self.phases
            .as_ref()
            .and_then(|ps| ps.get(i).copied())
            .unwrap_or(0.0)
    }
}

#[inline]
fn symmetric<R: Rng + ?Sized>(rng: &mut R, half_extent: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * half_extent
}

/// Uniform stars filling a cube of side `BACKGROUND_CUBE_SIDE` centered at the
/// origin, each with a twinkle phase in `[0, TAU)`.
pub fn background_stars<R: Rng + ?Sized>(rng: &mut R, count: usize) -> PointCloud {
    let half = BACKGROUND_CUBE_SIDE * 0.5;
    let mut positions = Vec::with_capacity(count);
    let mut phases = Vec::with_capacity(count);
    for _ in 0..count {
        positions.push(Vec3::new(
            symmetric(rng, half),
            symmetric(rng, half),
            symmetric(rng, half),
        ));
        phases.push(rng.gen::<f32>() * TAU);
    }
    PointCloud {
        positions,
        colors: None,
        phases: Some(phases),
    }
}

/// Three-armed Archimedean spiral in the XY plane: arm angle grows linearly
/// with radius.
///
/// Point `i` belongs to arm `i % GALAXY_ARM_BRANCHES`. Color runs from warm at
/// the center to cool at `GALAXY_RADIUS`, keyed by each point's own radius.
pub fn galaxy_arms<R: Rng + ?Sized>(rng: &mut R, count: usize) -> PointCloud {
    let warm = rgb_from_hex(GALAXY_WARM_HEX);
    let cool = rgb_from_hex(GALAXY_COOL_HEX);
    let branch_step = TAU / GALAXY_ARM_BRANCHES as f32;
    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    for i in 0..count {
        let radius = rng.gen::<f32>() * GALAXY_RADIUS;
        let spin = radius * GALAXY_SPIN;
        let branch = (i % GALAXY_ARM_BRANCHES) as f32 * branch_step;
        let angle = branch + spin;
        positions.push(Vec3::new(
            angle.cos() * radius + symmetric(rng, GALAXY_ARM_JITTER_XY),
            angle.sin() * radius + symmetric(rng, GALAXY_ARM_JITTER_XY),
            symmetric(rng, GALAXY_ARM_JITTER_Z),
        ));
        colors.push(warm.lerp(cool, radius / GALAXY_RADIUS));
    }
    PointCloud {
        positions,
        colors: Some(colors),
        phases: None,
    }
}

/// Dense spherical bulge. Radius is `u^GALAXY_CORE_BIAS * GALAXY_CORE_RADIUS`
/// so mass gathers toward the center; directions are uniform on the sphere.
pub fn galaxy_core<R: Rng + ?Sized>(rng: &mut R, count: usize) -> PointCloud {
    let positions = (0..count)
        .map(|_| {
            let r = rng.gen::<f32>().powf(GALAXY_CORE_BIAS) * GALAXY_CORE_RADIUS;
            let theta = rng.gen::<f32>() * TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            )
        })
        .collect();
    PointCloud {
        positions,
        colors: None,
        phases: None,
    }
}
