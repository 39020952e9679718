// Host-side tests for the thin-lens math core.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod bench {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod optics {
        include!("../src/core/optics.rs");
    }
}

use bench::constants::*;
use bench::optics::*;

#[test]
fn thin_lens_identity_holds_away_from_focus() {
    // 1/f = 1/d_o + 1/d_i must hold wherever the raw formula is finite.
    for f in [10.0_f64, 25.0, 40.0, 75.0, 120.0, 200.0] {
        for d_o in [5.0_f64, 20.0, 60.0, 150.0, 320.0, 500.0] {
            if (d_o - f).abs() < 0.5 {
                continue;
            }
            let d_i = image_distance(f, d_o);
            assert!(d_i.is_finite(), "f={f} d_o={d_o}");
            assert!(
                (1.0 / f - (1.0 / d_o + 1.0 / d_i)).abs() < 1e-12,
                "identity violated at f={f} d_o={d_o}: d_i={d_i}"
            );
            let m = magnification(d_i, d_o);
            assert!(
                (m + d_i / d_o).abs() < 1e-12,
                "magnification sign convention broken at f={f} d_o={d_o}"
            );
        }
    }
}

#[test]
fn threshold_has_absolute_floor_and_relative_term() {
    // Short focal lengths hit the 3 mm floor; long ones scale at 5%.
    assert_eq!(at_focal_threshold(10.0), 3.0);
    assert_eq!(at_focal_threshold(40.0), 3.0);
    assert!((at_focal_threshold(100.0) - 5.0).abs() < 1e-12);
    assert!((at_focal_threshold(200.0) - 10.0).abs() < 1e-12);
}

#[test]
fn classifier_layer_ignores_the_band() {
    // The pure classifier only looks at the raw distance; banding near the
    // focal plane is the solver's job. A raw distance computed just outside
    // exact focus is still finite and classifies Real.
    let raw = image_distance(50.0, 50.5);
    assert!(raw.is_finite() && raw > 0.0);
    assert_eq!(classify_image(raw), ImageKind::Real);

    assert_eq!(classify_image(f64::INFINITY), ImageKind::AtInfinity);
    assert_eq!(classify_image(f64::NAN), ImageKind::AtInfinity);
    assert_eq!(classify_image(2e6), ImageKind::AtInfinity);
    assert_eq!(classify_image(500.0), ImageKind::Real);
    assert_eq!(classify_image(-500.0), ImageKind::Virtual);
}

#[test]
fn solver_bands_the_singularity() {
    let solve = |f: f64, d_o: f64| {
        ImageSolution::solve(&OpticalParameters {
            f_mm: f,
            object_distance_mm: d_o,
        })
    };

    // Exactly at and just around focus: reported infinite, raw retained.
    for d_o in [50.0, 50.5, 49.0, 52.9, 47.1] {
        let s = solve(50.0, d_o);
        assert_eq!(s.kind, ImageKind::AtInfinity, "d_o={d_o}");
        assert!(s.image_distance.is_infinite());
        assert!(!s.magnification.is_finite());
    }
    // The raw value survives for continuity work when not exactly at focus.
    let s = solve(50.0, 50.5);
    assert!(s.raw_image_distance.is_finite());

    // Just outside the band on either side.
    let threshold = at_focal_threshold(50.0);
    let real = solve(50.0, 50.0 + threshold + 0.01);
    assert_eq!(real.kind, ImageKind::Real);
    assert!(real.image_distance > 0.0);
    let virt = solve(50.0, 50.0 - threshold - 0.01);
    assert_eq!(virt.kind, ImageKind::Virtual);
    assert!(virt.image_distance < 0.0);
}

#[test]
fn regime_classification_across_the_domain() {
    for f in [10.0_f64, 50.0, 110.0, 200.0] {
        let threshold = at_focal_threshold(f);
        for d_o in [5.0_f64, 25.0, 45.0, 55.0, 90.0, 250.0, 500.0] {
            let s = ImageSolution::solve(&OpticalParameters {
                f_mm: f,
                object_distance_mm: d_o,
            });
            if (d_o - f).abs() < threshold {
                assert_eq!(s.kind, ImageKind::AtInfinity, "f={f} d_o={d_o}");
            } else if d_o > f {
                assert_eq!(s.kind, ImageKind::Real, "f={f} d_o={d_o}");
            } else {
                assert_eq!(s.kind, ImageKind::Virtual, "f={f} d_o={d_o}");
            }
        }
    }
}

#[test]
fn regime_labels_match_kind() {
    let solve = |d_o: f64| {
        ImageSolution::solve(&OpticalParameters {
            f_mm: 50.0,
            object_distance_mm: d_o,
        })
    };
    assert_eq!(solve(50.0).regime_label(), "At focal point");
    assert_eq!(solve(46.0).regime_label(), "HMD (virtual image)");
    assert_eq!(solve(54.0).regime_label(), "Projector (real image)");
}

#[test]
fn near_focus_scenarios() {
    // Just outside the band at f=50 (threshold 3 mm): the real side throws
    // the image far to the right with a large inverted magnification, the
    // virtual side far to the left with a large upright one.
    let real = ImageSolution::solve(&OpticalParameters {
        f_mm: 50.0,
        object_distance_mm: 54.0,
    });
    assert_eq!(real.kind, ImageKind::Real);
    assert!((real.image_distance - 675.0).abs() < 1e-9);
    assert!((real.magnification + 12.5).abs() < 1e-9);

    let virt = ImageSolution::solve(&OpticalParameters {
        f_mm: 50.0,
        object_distance_mm: 46.0,
    });
    assert_eq!(virt.kind, ImageKind::Virtual);
    assert!((virt.image_distance + 575.0).abs() < 1e-9);
    assert!((virt.magnification - 12.5).abs() < 1e-9);
}

#[test]
fn parameters_clamp_to_slider_domain() {
    let p = OpticalParameters::clamped(1.0, 9999.0);
    assert_eq!(p.f_mm, FOCAL_MIN_MM);
    assert_eq!(p.object_distance_mm, DISTANCE_MAX_MM);

    let defaults = OpticalParameters::default();
    assert_eq!(defaults.f_mm, FOCAL_DEFAULT_MM);
    assert_eq!(defaults.object_distance_mm, DISTANCE_DEFAULT_MM);
}
