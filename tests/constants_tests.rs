// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod bench {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}

use bench::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn slider_domain_is_ordered_with_defaults_inside() {
    assert!(FOCAL_MIN_MM > 0.0 && FOCAL_MIN_MM < FOCAL_MAX_MM);
    assert!(DISTANCE_MIN_MM > 0.0 && DISTANCE_MIN_MM < DISTANCE_MAX_MM);
    assert!(FOCAL_DEFAULT_MM >= FOCAL_MIN_MM && FOCAL_DEFAULT_MM <= FOCAL_MAX_MM);
    assert!(DISTANCE_DEFAULT_MM >= DISTANCE_MIN_MM && DISTANCE_DEFAULT_MM <= DISTANCE_MAX_MM);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn band_and_clamp_constants_are_sane() {
    assert!(AT_FOCUS_ABS_MM > 0.0);
    assert!(AT_FOCUS_REL > 0.0 && AT_FOCUS_REL < 1.0);
    assert!(IMAGE_DISTANCE_FINITE_LIMIT_MM > DISTANCE_MAX_MM);
    assert!(FOCAL_RAY_INTERCEPT_CLAMP > 1.0);
    assert!(MAGNIFICATION_DRAW_CLAMP > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn viewport_constants_are_sane() {
    assert!(LENS_HALF_HEIGHT_MIN_MM < LENS_HALF_HEIGHT_MAX_MM);
    assert!(LENS_INTERCEPT_MARGIN_MM > 0.0);
    assert!(VIEWPORT_MIN_WIDTH_MM > 0.0 && VIEWPORT_MIN_HEIGHT_MM > 0.0);
    assert!(VIEWPORT_PAD_X_FRACTION > 0.0 && VIEWPORT_PAD_X_FRACTION < 1.0);
    assert!(VIEWPORT_PAD_Y_FRACTION > 0.0 && VIEWPORT_PAD_Y_FRACTION < 1.0);
    // The vertical extent must cover the tallest lens glyph.
    assert!(VERTICAL_EXTENT_MM >= LENS_HALF_HEIGHT_MAX_MM);
    // The drawn object must fit the minimum window with headroom.
    assert!(OBJECT_HEIGHT_MM * 2.0 < VIEWPORT_MIN_HEIGHT_MM);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hmd_defaults_describe_a_magnifier() {
    assert!(HMD_FOCAL_LENGTH_M > 0.0);
    assert!(HMD_EYE_RELIEF_M > 0.0);
    assert!(HMD_IPD_M > 0.0);
    assert!(HMD_DISPLAY_WIDTH_M > HMD_IPD_M);
    assert!(HMD_DISPLAY_HEIGHT_M > 0.0);
    // The display sits inside the focal length; that is what makes the
    // image virtual and magnified.
    assert!(HMD_LENS_DISPLAY_M < HMD_FOCAL_LENGTH_M);
    assert!(DISTORTION_K1 > 0.0 && DISTORTION_K2 > 0.0);
}
