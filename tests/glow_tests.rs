// Host-side tests for the off-viewport edge indicators.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod bench {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod optics {
        include!("../src/core/optics.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod glow {
        include!("../src/core/glow.rs");
    }
}

use bench::geometry::derive_scene;
use bench::glow::*;
use bench::optics::OpticalParameters;

fn scene(f: f64, d_o: f64) -> bench::geometry::SceneGeometry {
    derive_scene(
        &OpticalParameters {
            f_mm: f,
            object_distance_mm: d_o,
        },
        1280.0,
        720.0,
    )
}

#[test]
fn virtual_image_far_left_glows_purple() {
    // f=50, d_o=46: virtual image at -575 mm, well outside the stable
    // viewport's left edge.
    let scene = scene(50.0, 46.0);
    assert!(scene.solution.image_distance < scene.viewport.x_min);
    let glows = compute_glows(&scene);
    let left = glows
        .iter()
        .find(|g| g.edge == GlowEdge::Left)
        .expect("left glow expected");
    assert_eq!(left.color, GLOW_VIRTUAL_COLOR);
    assert!(left.text.contains("virtual image"));
    assert!(left.text.contains("575"));
    assert!(glows.iter().all(|g| g.edge != GlowEdge::Right));
}

#[test]
fn real_image_far_right_glows_green() {
    // f=50, d_o=54: real image at 675 mm, outside the right edge.
    let scene = scene(50.0, 54.0);
    assert!(scene.solution.image_distance > scene.viewport.x_max);
    let glows = compute_glows(&scene);
    let right = glows
        .iter()
        .find(|g| g.edge == GlowEdge::Right)
        .expect("right glow expected");
    assert_eq!(right.color, GLOW_REAL_COLOR);
    assert!(right.text.contains("real image"));
    assert!(right.text.contains("675"));
    assert!(glows.iter().all(|g| g.edge != GlowEdge::Left));
}

#[test]
fn color_follows_image_type_not_side() {
    // Tall clamped arrows spill over the vertical edges too; every glow of
    // one frame carries the image-type color.
    let virt = scene(50.0, 46.0);
    for glow in compute_glows(&virt) {
        assert_eq!(glow.color, GLOW_VIRTUAL_COLOR);
    }
    let real = scene(50.0, 54.0);
    for glow in compute_glows(&real) {
        assert_eq!(glow.color, GLOW_REAL_COLOR);
    }
}

#[test]
fn clamped_arrow_height_drives_vertical_glows() {
    // m = +12.5 draws a clamped upright arrow taller than the viewport.
    let upright = scene(50.0, 46.0);
    let glows = compute_glows(&upright);
    assert!(glows.iter().any(|g| g.edge == GlowEdge::Top));
    // m = -12.5 draws downward past the bottom edge.
    let inverted = scene(50.0, 54.0);
    let glows = compute_glows(&inverted);
    assert!(glows.iter().any(|g| g.edge == GlowEdge::Bottom));
}

#[test]
fn no_glow_at_the_focal_point_or_in_view() {
    assert!(compute_glows(&scene(50.0, 50.0)).is_empty());
    // f=40, d_o=100: modest real image well inside the viewport.
    let in_view = scene(40.0, 100.0);
    assert!(in_view.viewport.contains(in_view.image_tip_drawn.unwrap()));
    assert!(compute_glows(&in_view).is_empty());
}

#[test]
fn glow_labels_report_absolute_distance() {
    let glows = compute_glows(&scene(50.0, 46.0));
    for glow in &glows {
        assert!(
            glow.text.contains("mm"),
            "distance missing from {:?}",
            glow.text
        );
        assert!(!glow.text.contains('-'), "distance must be absolute");
    }
}
