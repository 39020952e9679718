// Thin-lens arithmetic and image classification.
//
// Two classification layers exist on purpose and must not be conflated:
// [`classify_image`] is a pure cutoff on a raw image distance, while
// [`ImageSolution::solve`] first applies the relative+absolute epsilon band
// to `|d_o - f|` and only consults the raw value outside it.

use super::constants::*;

/// Where the image formed, from the bench's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    /// Converging image on the far side of the lens (projector regime).
    Real,
    /// Diverging image on the display side of the lens (HMD regime).
    Virtual,
    /// Object sits inside the near-infinity band around the focal plane.
    AtInfinity,
}

/// The two slider-controlled quantities, in millimetres.
#[derive(Clone, Copy, Debug)]
pub struct OpticalParameters {
    pub f_mm: f64,
    pub object_distance_mm: f64,
}

impl Default for OpticalParameters {
    fn default() -> Self {
        Self {
            f_mm: FOCAL_DEFAULT_MM,
            object_distance_mm: DISTANCE_DEFAULT_MM,
        }
    }
}

impl OpticalParameters {
    /// Clamp both values into the slider domain. Slider min/max already
    /// constrain user input; this guards programmatic callers.
    pub fn clamped(f_mm: f64, object_distance_mm: f64) -> Self {
        Self {
            f_mm: f_mm.clamp(FOCAL_MIN_MM, FOCAL_MAX_MM),
            object_distance_mm: object_distance_mm.clamp(DISTANCE_MIN_MM, DISTANCE_MAX_MM),
        }
    }
}

/// Raw thin-lens image distance `1 / (1/f - 1/d_o)`.
///
/// Contract: `f > 0`, `d_o > 0`. The formula diverges as `d_o` approaches
/// `f`; the result there may be huge or non-finite, which is not an error.
/// Callers guard with [`at_focal_threshold`] before trusting it.
pub fn image_distance(f: f64, d_o: f64) -> f64 {
    1.0 / (1.0 / f - 1.0 / d_o)
}

/// Lateral magnification `-d_i / d_o` (signed; negative means inverted).
pub fn magnification(d_i: f64, d_o: f64) -> f64 {
    -d_i / d_o
}

/// Half-width of the near-infinity band around `d_o = f`, in mm.
pub fn at_focal_threshold(f: f64) -> f64 {
    (AT_FOCUS_REL * f).max(AT_FOCUS_ABS_MM)
}

/// Classify a raw image distance. Does NOT apply the epsilon band; that is
/// the solver's layer, applied to `|d_o - f|` before this is consulted.
pub fn classify_image(d_i: f64) -> ImageKind {
    if !d_i.is_finite() || d_i.abs() > IMAGE_DISTANCE_FINITE_LIMIT_MM {
        ImageKind::AtInfinity
    } else if d_i > 0.0 {
        ImageKind::Real
    } else {
        ImageKind::Virtual
    }
}

/// Per-frame solution of the thin-lens equation, recomputed from the two
/// slider values on every draw. Never cached across frames.
#[derive(Clone, Copy, Debug)]
pub struct ImageSolution {
    /// Signed image distance as reported to the rest of the system.
    /// `+inf` inside the near-infinity band.
    pub image_distance: f64,
    /// Unbanded thin-lens value, kept for slope-continuity work even when
    /// the reported distance is infinite.
    pub raw_image_distance: f64,
    /// Signed magnification; non-finite inside the band.
    pub magnification: f64,
    pub kind: ImageKind,
}

impl ImageSolution {
    pub fn solve(params: &OpticalParameters) -> Self {
        let f = params.f_mm;
        let d_o = params.object_distance_mm;
        let raw = image_distance(f, d_o);
        if (d_o - f).abs() < at_focal_threshold(f) {
            return Self {
                image_distance: f64::INFINITY,
                raw_image_distance: raw,
                magnification: f64::INFINITY,
                kind: ImageKind::AtInfinity,
            };
        }
        Self {
            image_distance: raw,
            raw_image_distance: raw,
            magnification: magnification(raw, d_o),
            kind: classify_image(raw),
        }
    }

    /// Caption shown in the regime readout.
    pub fn regime_label(&self) -> &'static str {
        match self.kind {
            ImageKind::AtInfinity => "At focal point",
            ImageKind::Virtual => "HMD (virtual image)",
            ImageKind::Real => "Projector (real image)",
        }
    }
}
