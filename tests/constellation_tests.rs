// Host-side tests for constellation shapes and the scatter morph.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod constellation {
        include!("../src/core/constellation.rs");
    }
}

use core::constants::*;
use core::constellation::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample() -> Vec<Constellation> {
    let mut rng = StdRng::seed_from_u64(11);
    build_constellations(&mut rng)
}

#[test]
fn builds_three_authored_shapes() {
    let cs = sample();
    let lens: Vec<usize> = cs.iter().map(|c| c.len()).collect();
    assert_eq!(lens, vec![4, 5, 7]);
    assert_eq!(cs[0].color, rgb_from_hex(CONSTELLATION_DEFAULT_HEX));
    assert_eq!(cs[1].color, rgb_from_hex(0xff66aa));
    assert_eq!(cs[2].color, rgb_from_hex(0x66ffaa));
}

#[test]
fn outline_is_closed_loop_of_anchors() {
    for c in sample() {
        assert_eq!(c.outline.len(), c.len() + 1);
        assert_eq!(c.outline.first(), c.outline.last());
        assert_eq!(&c.outline[..c.len()], &c.anchors[..]);
    }
}

#[test]
fn scatter_targets_lie_in_annulus() {
    for c in sample() {
        assert_eq!(c.scattered.len(), c.len());
        for s in &c.scattered {
            let r = s.truncate().length();
            assert!(r >= SCATTER_RADIUS_MIN - 1e-3 && r <= SCATTER_RADIUS_MAX + 1e-3, "{r}");
            assert!(s.z.abs() <= SCATTER_JITTER_Z);
        }
    }
}

#[test]
fn morph_endpoints_match_anchors_and_scatter() {
    for mut c in sample() {
        assert_eq!(c.live, c.anchors);
        c.morph(1.0);
        for (l, s) in c.live.iter().zip(&c.scattered) {
            assert!(l.distance(*s) < 1e-3);
        }
        c.morph(0.0);
        assert_eq!(c.live, c.anchors);
    }
}

#[test]
fn partial_morph_lies_between_endpoints() {
    let mut c = sample().remove(2);
    c.morph(0.25);
    assert_eq!(c.morph_fraction(), 0.25);
    for ((l, a), s) in c.live.iter().zip(&c.anchors).zip(&c.scattered) {
        let total = a.distance(*s);
        assert!((l.distance(*a) - 0.25 * total).abs() < 1e-2);
        assert!((l.distance(*s) - 0.75 * total).abs() < 1e-2);
    }
}

#[test]
fn morph_clamps_and_preserves_length() {
    let mut c = sample().remove(0);
    let n = c.len();
    for f in [-3.0, 0.4, 7.0, f32::NAN, f32::INFINITY] {
        c.morph(f);
        assert_eq!(c.live.len(), n);
        assert!((0.0..=1.0).contains(&c.morph_fraction()));
    }
    c.morph(f32::NAN);
    assert_eq!(c.morph_fraction(), 0.0);
    assert_eq!(c.live, c.anchors);
    c.morph(7.0);
    assert_eq!(c.morph_fraction(), 1.0);
}

#[test]
fn dirty_flag_tracks_updates() {
    let mut c = sample().remove(1);
    assert!(c.take_dirty(), "fresh shapes need an upload");
    assert!(!c.take_dirty());
    c.morph(0.5);
    assert!(c.take_dirty());
    assert!(!c.take_dirty());
}

#[test]
fn empty_shape_is_harmless() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut c = Constellation::new(&[], CONSTELLATION_DEFAULT_HEX, &mut rng);
    assert!(c.is_empty());
    assert!(c.outline.is_empty());
    c.morph(0.5);
    assert!(c.live.is_empty());
}
