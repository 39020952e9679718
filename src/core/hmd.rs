// Closed-form HMD optics and the radial distortion mapping.
//
// Pure arithmetic over six physical inputs; no iteration and no error
// cases. Inputs are assumed physically valid (all positive; `d_o < f` is
// the meaningful HMD configuration and gives magnification > 1).

use glam::DVec2;

use super::constants::*;

/// Physical description of one HMD eye/lens/display assembly, in metres.
#[derive(Clone, Copy, Debug)]
pub struct HmdParameters {
    pub focal_length_m: f64,
    pub lens_display_m: f64,
    pub eye_relief_m: f64,
    pub ipd_m: f64,
    pub display_width_m: f64,
    pub display_height_m: f64,
}

impl Default for HmdParameters {
    /// Cardboard V2 numbers.
    fn default() -> Self {
        Self {
            focal_length_m: HMD_FOCAL_LENGTH_M,
            lens_display_m: HMD_LENS_DISPLAY_M,
            eye_relief_m: HMD_EYE_RELIEF_M,
            ipd_m: HMD_IPD_M,
            display_width_m: HMD_DISPLAY_WIDTH_M,
            display_height_m: HMD_DISPLAY_HEIGHT_M,
        }
    }
}

/// Derived HMD quantities. Angles in degrees, distances in metres.
#[derive(Clone, Copy, Debug)]
pub struct HmdOptics {
    pub magnification: f64,
    /// Signed virtual image distance from the lens (negative for `d_o < f`).
    pub image_distance_m: f64,
    /// Eye to virtual image: `|d_i| + eye_relief`. Doubles as the frustum
    /// near plane.
    pub near_plane_m: f64,
    pub fov_vertical_deg: f64,
    pub fov_h_nasal_deg: f64,
    pub fov_h_temporal_deg: f64,
    pub fov_horizontal_deg: f64,
    /// Magnified nasal half-width at the image plane, per eye.
    pub frustum_nasal_m: f64,
    /// Magnified temporal half-width at the image plane, per eye.
    pub frustum_temporal_m: f64,
}

/// Compute every derived quantity from the physical parameters.
///
/// Each eye sees its half of the shared display through a lens centred
/// `ipd/2` from the display midline; the nasal extent spans from the lens
/// axis to the midline, the temporal extent covers the rest of the half.
pub fn calc_hmd_optics(p: &HmdParameters) -> HmdOptics {
    let f = p.focal_length_m;
    let d_o = p.lens_display_m;
    let d_i = f * d_o / (d_o - f);
    let m = -d_i / d_o;
    let near = d_i.abs() + p.eye_relief_m;

    let half_image_height = m * p.display_height_m / 2.0;
    let nasal_extent = m * p.ipd_m / 2.0;
    let temporal_extent = m * (p.display_width_m / 2.0 - p.ipd_m / 2.0);

    let fov_vertical = 2.0 * (half_image_height / near).atan();
    let fov_nasal = (nasal_extent / near).atan();
    let fov_temporal = (temporal_extent / near).atan();

    HmdOptics {
        magnification: m,
        image_distance_m: d_i,
        near_plane_m: near,
        fov_vertical_deg: fov_vertical.to_degrees(),
        fov_h_nasal_deg: fov_nasal.to_degrees(),
        fov_h_temporal_deg: fov_temporal.to_degrees(),
        fov_horizontal_deg: (fov_nasal + fov_temporal).to_degrees(),
        frustum_nasal_m: nasal_extent,
        frustum_temporal_m: temporal_extent,
    }
}

/// Radial polynomial distortion: scale the offset from `center` by
/// `1 + k1*r^2 + k2*r^4`.
pub fn apply_distortion(p: DVec2, center: DVec2, k1: f64, k2: f64) -> DVec2 {
    let d = p - center;
    let r2 = d.length_squared();
    let factor = 1.0 + k1 * r2 + k2 * r2 * r2;
    center + d * factor
}
