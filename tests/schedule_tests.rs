// Host-side tests for the zoom-driven visibility scheduler.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod schedule {
        include!("../src/core/schedule.rs");
    }
}

use core::constants::{MAX_ZOOM, MIN_ZOOM};
use core::schedule::*;

#[test]
fn ease_is_zero_below_start_and_one_above_end() {
    assert_eq!(ease(-1.0, 0.2, 0.6), 0.0);
    assert_eq!(ease(0.2, 0.2, 0.6), 0.0);
    assert_eq!(ease(0.6, 0.2, 0.6), 1.0);
    assert_eq!(ease(5.0, 0.2, 0.6), 1.0);
}

#[test]
fn ease_is_half_at_midpoint_and_monotonic() {
    assert!((ease(0.4, 0.2, 0.6) - 0.5).abs() < 1e-6);
    let mut prev = 0.0;
    for i in 0..=200 {
        let v = 0.2 + 0.4 * i as f32 / 200.0;
        let e = ease(v, 0.2, 0.6);
        assert!(e >= prev, "ease decreased at {v}");
        assert!((0.0..=1.0).contains(&e));
        prev = e;
    }
}

#[test]
fn progress_spans_zoom_range() {
    assert_eq!(progress(MAX_ZOOM), 0.0);
    assert_eq!(progress(MIN_ZOOM), 1.0);
    let mid = (MAX_ZOOM + MIN_ZOOM) * 0.5;
    assert!((progress(mid) - 0.5).abs() < 1e-6);
    assert_eq!(progress(MAX_ZOOM + 1000.0), 0.0);
    assert_eq!(progress(f32::NAN), 0.0);
}

#[test]
fn morph_fraction_thresholds() {
    for p in [0.0, 0.3, 0.55] {
        assert_eq!(visibility(p, 0.0).morph, 0.0, "progress {p}");
    }
    for p in [0.95, 0.99, 1.0] {
        assert_eq!(visibility(p, 0.0).morph, 1.0, "progress {p}");
    }
    let m = visibility(0.75, 0.0).morph;
    assert!(m > 0.0 && m < 1.0);
}

#[test]
fn galaxy_layers_fade_in_late() {
    assert_eq!(visibility(0.6, 0.0).galaxy_core, 0.0);
    assert_eq!(visibility(0.85, 0.0).galaxy_core, 1.0);
    assert_eq!(visibility(0.8, 0.0).galaxy_arms, 0.0);
    assert_eq!(visibility(1.0, 0.0).galaxy_arms, 1.0);
    let v = visibility(0.9, 0.0);
    assert!(v.galaxy_arms > 0.0 && v.galaxy_arms < 1.0);
    assert_eq!(v.galaxy_core, 1.0);
}

#[test]
fn constellation_lines_flash_in_mid_band() {
    assert_eq!(visibility(0.2, 0.0).constellation_lines, 0.0);
    assert!((visibility(0.55, 0.0).constellation_lines - 0.4).abs() < 1e-6);
    assert_eq!(visibility(0.8, 0.0).constellation_lines, 0.0);
    for i in 0..=100 {
        let l = visibility(i as f32 / 100.0, 0.0).constellation_lines;
        assert!((0.0..=0.4 + 1e-6).contains(&l));
    }
}

#[test]
fn fully_zoomed_out_shows_only_background() {
    for t in [0.0, 0.4, 1.3, 7.9, 120.0] {
        let v = visibility(progress(MAX_ZOOM), t);
        assert_eq!(v.constellation_points, 0.0);
        assert_eq!(v.constellation_lines, 0.0);
        assert_eq!(v.morph, 0.0);
        assert_eq!(v.galaxy_core, 0.0);
        assert_eq!(v.galaxy_arms, 0.0);
        assert!(v.background >= 0.4 - 1e-6 && v.background <= 1.0);
    }
}

#[test]
fn fully_zoomed_in_scatters_and_shows_galaxy() {
    let v = visibility(progress(MIN_ZOOM), 2.0);
    assert_eq!(v.morph, 1.0);
    assert_eq!(v.galaxy_arms, 1.0);
    assert_eq!(v.galaxy_core, 1.0);
    assert_eq!(v.constellation_lines, 0.0);
}

#[test]
fn constellation_points_pulse_once_visible() {
    let a = visibility(0.25, 0.0).constellation_points;
    let b = visibility(0.25, (std::f32::consts::PI / 2.0) / 3.5).constellation_points;
    assert!((a - 0.7).abs() < 1e-5);
    assert!((b - 1.0).abs() < 1e-5);
}
