// Host-side tests for procedural point clouds.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod cloud {
        include!("../src/core/cloud.rs");
    }
}

use core::cloud::*;
use core::constants::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

#[test]
fn background_fills_cube_with_phases() {
    let mut rng = StdRng::seed_from_u64(1);
    let cloud = background_stars(&mut rng, 4000);
    assert_eq!(cloud.len(), 4000);
    assert!(cloud.colors.is_none());
    let half = BACKGROUND_CUBE_SIDE * 0.5;
    for p in &cloud.positions {
        assert!(p.abs().max_element() <= half, "{p:?} outside cube");
    }
    let phases = cloud.phases.as_ref().unwrap();
    assert_eq!(phases.len(), cloud.len());
    assert!(phases.iter().all(|ph| (0.0..TAU).contains(ph)));
    // spread should reach well into every octant
    assert!(cloud.positions.iter().any(|p| p.x > half * 0.9));
    assert!(cloud.positions.iter().any(|p| p.z < -half * 0.9));
}

#[test]
fn arms_stay_within_disk_and_jitter() {
    let mut rng = StdRng::seed_from_u64(2);
    let cloud = galaxy_arms(&mut rng, 6000);
    let max_planar = GALAXY_RADIUS + (2.0f32).sqrt() * GALAXY_ARM_JITTER_XY;
    for p in &cloud.positions {
        assert!(p.truncate().length() <= max_planar + 1e-3);
        assert!(p.z.abs() <= GALAXY_ARM_JITTER_Z);
    }
}

#[test]
fn arm_colors_run_from_warm_to_cool() {
    let mut rng = StdRng::seed_from_u64(3);
    let cloud = galaxy_arms(&mut rng, 3000);
    let colors = cloud.colors.as_ref().unwrap();
    assert_eq!(colors.len(), cloud.len());
    let warm = rgb_from_hex(GALAXY_WARM_HEX);
    let cool = rgb_from_hex(GALAXY_COOL_HEX);
    let lo = warm.min(cool) - Vec3::splat(1e-5);
    let hi = warm.max(cool) + Vec3::splat(1e-5);
    for c in colors {
        assert!(c.cmpge(lo).all() && c.cmple(hi).all(), "{c:?}");
    }
    // points close to the center are close to the warm color
    let (inner, _) = cloud
        .positions
        .iter()
        .zip(colors)
        .min_by(|a, b| a.0.truncate().length().total_cmp(&b.0.truncate().length()))
        .map(|(p, c)| (*c, *p))
        .unwrap();
    assert!(inner.distance(warm) < 0.25);
}

#[test]
fn core_is_bounded_and_concentrated() {
    let mut rng = StdRng::seed_from_u64(4);
    let cloud = galaxy_core(&mut rng, 10_000);
    assert!(cloud.colors.is_none() && cloud.phases.is_none());
    let mut radii: Vec<f32> = cloud.positions.iter().map(|p| p.length()).collect();
    assert!(radii.iter().all(|r| *r <= GALAXY_CORE_RADIUS + 1e-3));
    radii.sort_by(f32::total_cmp);
    // median of u^2.5 * 100 is 0.5^2.5 * 100, about 17.7
    let median = radii[radii.len() / 2];
    assert!((14.0..22.0).contains(&median), "median {median}");
    let inner_half = radii.iter().filter(|r| **r < GALAXY_CORE_RADIUS * 0.5).count();
    let frac = inner_half as f32 / radii.len() as f32;
    assert!((0.72..0.80).contains(&frac), "inner fraction {frac}");
}

#[test]
fn flat_buffers_have_three_floats_per_point() {
    let mut rng = StdRng::seed_from_u64(5);
    let arms = galaxy_arms(&mut rng, 10);
    assert_eq!(arms.flat_positions().len(), 30);
    assert_eq!(arms.flat_colors().map(|c| c.len()), Some(30));
    let core = galaxy_core(&mut rng, 10);
    assert!(core.flat_colors().is_none());
    assert_eq!(core.color_or(3, Vec3::ONE), Vec3::ONE);
    assert_eq!(core.phase_or_zero(3), 0.0);
}

#[test]
fn zero_count_is_empty() {
    let mut rng = StdRng::seed_from_u64(6);
    assert!(background_stars(&mut rng, 0).is_empty());
    assert!(galaxy_arms(&mut rng, 0).is_empty());
    assert!(galaxy_core(&mut rng, 0).is_empty());
}

#[test]
fn hex_colors_decode() {
    assert_eq!(rgb_from_hex(0xffffff), Vec3::ONE);
    assert_eq!(rgb_from_hex(0x000000), Vec3::ZERO);
    // sRGB literals come out linearized
    let c = rgb_from_hex(GALAXY_WARM_HEX);
    assert!((c.x - 1.0).abs() < 1e-6);
    assert!((c.y - 0.6038).abs() < 1e-3, "g {}", c.y);
    assert!((c.z - 0.2462).abs() < 1e-3, "b {}", c.z);
    let grey = rgb_from_hex(0x808080);
    assert!((grey.x - 0.2159).abs() < 1e-3);
    assert!(grey.x < 128.0 / 255.0);
}

#[test]
fn srgb_decode_is_monotonic_with_fixed_ends() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-7);
    let mut prev = 0.0;
    for i in 1..=255 {
        let v = srgb_to_linear(i as f32 / 255.0);
        assert!(v > prev);
        prev = v;
    }
}
