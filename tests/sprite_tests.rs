// Host-side tests for the rasterized star sprite.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod sprite {
        include!("../src/core/sprite.rs");
    }
}

use core::constants::SPRITE_SIZE;
use core::sprite::*;

#[test]
fn star_sprite_dimensions() {
    let s = star_sprite();
    assert_eq!(s.size, SPRITE_SIZE);
    assert_eq!(s.rgba.len(), (SPRITE_SIZE * SPRITE_SIZE * 4) as usize);
}

#[test]
fn center_is_opaque_white_and_corners_transparent() {
    let s = star_sprite();
    let c = s.texel(SPRITE_SIZE / 2, SPRITE_SIZE / 2);
    assert_eq!(&c[..3], &[255, 255, 255]);
    assert!(c[3] >= 245, "center alpha {}", c[3]);
    for (x, y) in [(0, 0), (SPRITE_SIZE - 1, 0), (0, SPRITE_SIZE - 1), (SPRITE_SIZE - 1, SPRITE_SIZE - 1)] {
        assert_eq!(s.texel(x, y)[3], 0);
    }
}

#[test]
fn halo_is_pale_blue_and_half_transparent() {
    let s = star_sprite();
    // texel center sits about 30% of the radius from the middle
    let x = SPRITE_SIZE / 2 + 19;
    let [r, g, b, a] = s.texel(x, SPRITE_SIZE / 2);
    assert!((170..=190).contains(&r), "r {r}");
    assert!((210..=230).contains(&g), "g {g}");
    assert!(b >= 245);
    assert!((118..=136).contains(&a), "a {a}");
}

#[test]
fn alpha_falls_off_with_radius() {
    let s = star_sprite();
    let y = SPRITE_SIZE / 2;
    let mut prev = 255u8;
    for x in SPRITE_SIZE / 2..SPRITE_SIZE {
        let a = s.texel(x, y)[3];
        assert!(a <= prev);
        prev = a;
    }
}

#[test]
fn gradient_hits_stops_and_clamps() {
    assert_eq!(sample_gradient(&STAR_GRADIENT, -1.0), [1.0, 1.0, 1.0, 1.0]);
    let inner = sample_gradient(&STAR_GRADIENT, 0.1);
    assert!((inner[3] - 0.9).abs() < 1e-6);
    assert_eq!(sample_gradient(&STAR_GRADIENT, 1.0), [0.0; 4]);
    assert_eq!(sample_gradient(&STAR_GRADIENT, 3.0), [0.0; 4]);
    let mid = sample_gradient(&STAR_GRADIENT, 0.65);
    assert!((mid[3] - 0.25).abs() < 1e-5);
    assert_eq!(sample_gradient(&[], 0.5), [0.0; 4]);
}
