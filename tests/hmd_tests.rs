// Host-side tests for the closed-form HMD optics and distortion mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod bench {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod hmd {
        include!("../src/core/hmd.rs");
    }
}

use bench::hmd::*;
use glam::DVec2;

#[test]
fn cardboard_v2_reference_values() {
    let optics = calc_hmd_optics(&HmdParameters::default());
    assert!(
        (optics.magnification - 43.0).abs() < 1e-6,
        "magnification {}",
        optics.magnification
    );
    assert!(
        (optics.fov_vertical_deg - 77.4268).abs() < 1e-3,
        "fovV {}",
        optics.fov_vertical_deg
    );
    assert!(
        (optics.fov_h_nasal_deg - 37.4584).abs() < 1e-3,
        "nasal {}",
        optics.fov_h_nasal_deg
    );
    assert!(
        (optics.fov_h_temporal_deg - 33.4095).abs() < 1e-3,
        "temporal {}",
        optics.fov_h_temporal_deg
    );
    assert!(
        (optics.fov_horizontal_deg - 70.8679).abs() < 1e-3,
        "fovH {}",
        optics.fov_horizontal_deg
    );
}

#[test]
fn cardboard_v2_distances() {
    let optics = calc_hmd_optics(&HmdParameters::default());
    // Virtual image 1.806 m behind the lens, seen from 18 mm eye relief.
    assert!((optics.image_distance_m + 1.806).abs() < 1e-6);
    assert!((optics.near_plane_m - 1.824).abs() < 1e-6);
}

#[test]
fn frustum_extents_are_magnified_half_widths() {
    let p = HmdParameters::default();
    let optics = calc_hmd_optics(&p);
    assert!((optics.frustum_nasal_m - optics.magnification * p.ipd_m / 2.0).abs() < 1e-9);
    assert!(
        (optics.frustum_temporal_m
            - optics.magnification * (p.display_width_m / 2.0 - p.ipd_m / 2.0))
            .abs()
            < 1e-9
    );
    // Cardboard's display is narrower than two IPDs of image, so the nasal
    // extent dominates.
    assert!(optics.frustum_nasal_m > optics.frustum_temporal_m);
}

#[test]
fn magnification_doubles_with_display_at_half_focal() {
    // d_o = f/2 gives d_i = -f and magnification exactly 2.
    let optics = calc_hmd_optics(&HmdParameters {
        focal_length_m: 0.040,
        lens_display_m: 0.020,
        ..HmdParameters::default()
    });
    assert!((optics.magnification - 2.0).abs() < 1e-12);
    assert!((optics.image_distance_m + 0.040).abs() < 1e-12);
}

#[test]
fn distortion_fixes_center_and_zero_coefficients() {
    let center = DVec2::new(0.3, -0.2);
    let p = DVec2::new(0.9, 0.4);
    assert_eq!(apply_distortion(center, center, 0.34, 0.55), center);
    let undistorted = apply_distortion(p, center, 0.0, 0.0);
    assert!((undistorted - p).length() < 1e-12);
}

#[test]
fn distortion_scales_radially_outward() {
    let center = DVec2::ZERO;
    // Positive coefficients push points outward, preserving direction, and
    // the push grows with radius.
    let mut prev_gain = 1.0;
    for r in [0.2, 0.5, 0.8, 1.0] {
        let p = DVec2::new(r, 0.0);
        let q = apply_distortion(p, center, 0.34, 0.55);
        assert!(q.y.abs() < 1e-12);
        let gain = q.x / p.x;
        assert!(gain > prev_gain, "gain not increasing at r={r}");
        prev_gain = gain;
    }
    // At unit radius the polynomial is 1 + k1 + k2.
    let unit = apply_distortion(DVec2::new(1.0, 0.0), center, 0.34, 0.55);
    assert!((unit.x - 1.89).abs() < 1e-12);
}
