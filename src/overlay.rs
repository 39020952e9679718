//! DOM text readouts beside the canvas.

use web_sys as web;

use crate::core::hmd::{calc_hmd_optics, HmdParameters};
use crate::core::optics::{ImageKind, ImageSolution, OpticalParameters};
use crate::dom;

/// Refresh every readout from the current slider state. Elements the host
/// page omits are skipped silently.
pub fn update_readouts(document: &web::Document, params: &OpticalParameters) {
    let solution = ImageSolution::solve(params);

    let distance_text = if solution.image_distance.is_finite() {
        format!("{:.0} mm", solution.image_distance)
    } else {
        "\u{221e}".to_string()
    };
    dom::set_text(document, "image-distance-readout", &distance_text);

    let mag_text = if solution.magnification.is_finite() {
        format!("{:.2}\u{d7}", solution.magnification)
    } else {
        "--".to_string()
    };
    dom::set_text(document, "magnification-readout", &mag_text);

    dom::set_text(document, "regime-readout", solution.regime_label());

    dom::set_text(document, "hmd-fov-readout", &hmd_summary(params, &solution));
}

/// One-line per-eye FOV summary for the HMD regime, using the slider focal
/// length and display distance over the default physical parameters.
fn hmd_summary(params: &OpticalParameters, solution: &ImageSolution) -> String {
    if solution.kind != ImageKind::Virtual {
        return "--".to_string();
    }
    let optics = calc_hmd_optics(&HmdParameters {
        focal_length_m: params.f_mm / 1000.0,
        lens_display_m: params.object_distance_mm / 1000.0,
        ..HmdParameters::default()
    });
    format!(
        "per-eye FOV {:.1}\u{b0} \u{d7} {:.1}\u{b0} \u{b7} near plane {:.2} m",
        optics.fov_horizontal_deg, optics.fov_vertical_deg, optics.near_plane_m
    )
}
