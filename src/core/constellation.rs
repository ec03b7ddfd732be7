use super::constants::*;
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Short point lists; authored shapes have fewer than eight anchors.
pub type Points = SmallVec<[Vec3; 8]>;

/// A line-drawn shape that can dissolve into a random scatter.
///
/// `live` always has the same length as `anchors` and `scattered`; only its
/// values change. `outline` is the closed polyline and never moves.
#[derive(Clone, Debug)]
pub struct Constellation {
    pub anchors: Points,
    pub scattered: Points,
    pub live: Points,
    pub outline: Points,
    pub color: Vec3,
    morph: f32,
    dirty: bool,
}

impl Constellation {
    pub fn new<R: Rng + ?Sized>(anchors: &[Vec3], color_hex: u32, rng: &mut R) -> Self {
        let scattered = anchors.iter().map(|_| scatter_point(rng)).collect();
        let mut outline: Points = anchors.iter().copied().collect();
        if let Some(first) = anchors.first() {
            outline.push(*first);
        }
        Self {
            anchors: anchors.iter().copied().collect(),
            scattered,
            live: anchors.iter().copied().collect(),
            outline,
            color: rgb_from_hex(color_hex),
            morph: 0.0,
            dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn morph_fraction(&self) -> f32 {
        self.morph
    }

    /// Blend every live point from its anchor (0) toward its scatter target (1).
    pub fn morph(&mut self, fraction: f32) {
        let f = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        for ((live, a), s) in self
            .live
            .iter_mut()
            .zip(self.anchors.iter())
            .zip(self.scattered.iter())
        {
            *live = a.lerp(*s, f);
        }
        self.morph = f;
        self.dirty = true;
    }

    /// Returns whether the live buffer changed since the last call, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

fn scatter_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let radius = SCATTER_RADIUS_MIN + rng.gen::<f32>() * (SCATTER_RADIUS_MAX - SCATTER_RADIUS_MIN);
    let angle = rng.gen::<f32>() * TAU;
    Vec3::new(
        angle.cos() * radius,
        angle.sin() * radius,
        (rng.gen::<f32>() - 0.5) * 2.0 * SCATTER_JITTER_Z,
    )
}

/// The three shapes drawn over the galaxy, with their line colors.
pub fn authored_shapes() -> Vec<(Points, u32)> {
    vec![
        (
            Points::from_slice(&[
                Vec3::new(-150.0, 100.0, 0.0),
                Vec3::new(0.0, 200.0, 0.0),
                Vec3::new(150.0, 100.0, 0.0),
                Vec3::new(50.0, -50.0, 0.0),
            ]),
            CONSTELLATION_DEFAULT_HEX,
        ),
        (
            Points::from_slice(&[
                Vec3::new(400.0, 300.0, 0.0),
                Vec3::new(450.0, 400.0, 0.0),
                Vec3::new(550.0, 300.0, 0.0),
                Vec3::new(650.0, 400.0, 0.0),
                Vec3::new(700.0, 300.0, 0.0),
            ]),
            0xff66aa,
        ),
        (
            Points::from_slice(&[
                Vec3::new(-600.0, -100.0, 0.0),
                Vec3::new(-450.0, -50.0, 0.0),
                Vec3::new(-350.0, -50.0, 0.0),
                Vec3::new(-250.0, -150.0, 0.0),
                Vec3::new(-200.0, -300.0, 0.0),
                Vec3::new(-400.0, -350.0, 0.0),
                Vec3::new(-550.0, -300.0, 0.0),
            ]),
            0x66ffaa,
        ),
    ]
}

pub fn build_constellations<R: Rng + ?Sized>(rng: &mut R) -> Vec<Constellation> {
    authored_shapes()
        .iter()
        .map(|(anchors, hex)| Constellation::new(anchors, *hex, rng))
        .collect()
}
