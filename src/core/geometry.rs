// Principal-ray construction, the stable world viewport, and the
// world-to-canvas mapping.
//
// The viewport is derived from the slider parameters only. The image
// position is deliberately excluded from the bounds so the window never
// chases the divergent image coordinate as `d_o` approaches `f`; an image
// outside the window is the glow module's problem, not the viewport's.

use glam::DVec2;
use smallvec::SmallVec;

use super::constants::*;
use super::optics::{ImageKind, ImageSolution, OpticalParameters};

/// Which of the three canonical construction rays this is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayKind {
    /// Enters parallel to the axis, refracts through the back focal point.
    Parallel,
    /// Passes the lens centre undeviated.
    Central,
    /// Aimed along the front focal point, exits parallel to the axis.
    Focal,
}

/// One drawn ray: 2 or 3 world points (source, lens-plane crossing, far
/// endpoint) plus the single post-lens slope shared by the forward draw and
/// the dashed backward extension. The slope is computed once here; the two
/// drawing passes must never rederive it.
#[derive(Clone, Debug)]
pub struct RayPath {
    pub kind: RayKind,
    pub points: SmallVec<[DVec2; 3]>,
    pub exit_slope: f64,
    /// Lens-plane crossing as drawn. The focal ray's intercept is clamped
    /// to `±5·h` inside the near-infinity band only.
    pub lens_point: DVec2,
}

/// World-space window, millimetres. `y` grows upward.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

/// Uniform-scale, Y-flipped affine map from world mm to canvas pixels.
#[derive(Clone, Copy, Debug)]
pub struct WorldToCanvas {
    px_per_mm: f64,
    x_min: f64,
    y_min: f64,
    canvas_h: f64,
}

impl WorldToCanvas {
    pub fn new(viewport: &Viewport, canvas_w: f64, canvas_h: f64) -> Self {
        let sx = canvas_w / viewport.width();
        let sy = canvas_h / viewport.height();
        // Equal after aspect expansion; min guards rounding drift.
        Self {
            px_per_mm: sx.min(sy),
            x_min: viewport.x_min,
            y_min: viewport.y_min,
            canvas_h,
        }
    }

    pub fn to_canvas(&self, p: DVec2) -> DVec2 {
        DVec2::new(
            (p.x - self.x_min) * self.px_per_mm,
            self.canvas_h - (p.y - self.y_min) * self.px_per_mm,
        )
    }

    pub fn px(&self, len_mm: f64) -> f64 {
        len_mm * self.px_per_mm
    }
}

/// Everything the renderer needs for one frame, derived from the two slider
/// values and the canvas size. Frame-local; rebuilt from scratch per draw.
#[derive(Clone, Debug)]
pub struct SceneGeometry {
    pub params: OpticalParameters,
    pub solution: ImageSolution,
    pub object_tip: DVec2,
    /// True image tip `(d_i, m·h)`; `None` inside the band.
    pub image_tip: Option<DVec2>,
    /// Image tip with the height clamped to `±MAGNIFICATION_DRAW_CLAMP·h`
    /// for drawing. Backward extensions ignore this and use the true slope.
    pub image_tip_drawn: Option<DVec2>,
    pub rays: [RayPath; 3],
    pub lens_half_height: f64,
    pub eye_x: f64,
    pub viewport: Viewport,
}

impl SceneGeometry {
    /// The object sits inside the focal length (goggle side of the bench).
    /// The band keeps the side it is entered from.
    pub fn hmd_side(&self) -> bool {
        self.params.object_distance_mm < self.f()
    }

    fn f(&self) -> f64 {
        self.params.f_mm
    }
}

/// World x of the eye glyph. Regime-dependent so the HMD eye keeps clear of
/// long focal lengths.
pub fn eye_world_x(params: &OpticalParameters) -> f64 {
    if params.object_distance_mm < params.f_mm {
        (EYE_X_HMD_FOCAL_COEFF * params.f_mm).max(EYE_X_HMD_MIN_MM)
    } else {
        EYE_X_PROJECTOR_MM
    }
}

/// Stable viewport: display anchor, eye anchor and both focal points with
/// margins, then minimum size, fractional padding, and aspect expansion.
/// Never derived from the image position; finite for every slider pair.
pub fn derive_viewport(params: &OpticalParameters, canvas_aspect: f64) -> Viewport {
    let d_o = params.object_distance_mm;
    let f = params.f_mm;

    let mut x_min = (-d_o - DISPLAY_MARGIN_MM).min(-f);
    let mut x_max = eye_world_x(params).max(f);
    let mut y_min = -VERTICAL_EXTENT_MM;
    let mut y_max = VERTICAL_EXTENT_MM;

    let width_deficit = VIEWPORT_MIN_WIDTH_MM - (x_max - x_min);
    if width_deficit > 0.0 {
        x_min -= width_deficit / 2.0;
        x_max += width_deficit / 2.0;
    }
    let height_deficit = VIEWPORT_MIN_HEIGHT_MM - (y_max - y_min);
    if height_deficit > 0.0 {
        y_min -= height_deficit / 2.0;
        y_max += height_deficit / 2.0;
    }

    let pad_x = (x_max - x_min) * VIEWPORT_PAD_X_FRACTION;
    let pad_y = (y_max - y_min) * VIEWPORT_PAD_Y_FRACTION;
    x_min -= pad_x;
    x_max += pad_x;
    y_min -= pad_y;
    y_max += pad_y;

    let aspect = if canvas_aspect.is_finite() && canvas_aspect > 0.0 {
        canvas_aspect
    } else {
        16.0 / 9.0
    };
    let width = x_max - x_min;
    let height = y_max - y_min;
    if width / height < aspect {
        // Too narrow for the canvas: widen, never crop.
        let extra = (height * aspect - width) / 2.0;
        x_min -= extra;
        x_max += extra;
    } else {
        let extra = (width / aspect - height) / 2.0;
        y_min -= extra;
        y_max += extra;
    }

    Viewport {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}

/// Build the three principal rays. `x_end` is the forward drawing limit
/// (the viewport's right edge).
fn principal_rays(params: &OpticalParameters, solution: &ImageSolution, x_end: f64) -> [RayPath; 3] {
    let f = params.f_mm;
    let d_o = params.object_distance_mm;
    let h = OBJECT_HEIGHT_MM;
    let tip = DVec2::new(-d_o, h);
    let intercept_clamp = FOCAL_RAY_INTERCEPT_CLAMP * h;

    if solution.kind == ImageKind::AtInfinity {
        // Image receding to infinity: simplified geometry, all three rays
        // exit mutually parallel at the parallel-ray slope.
        let slope = -h / f;
        let central_lens_y = h * (1.0 - d_o / f);
        let focal_raw = h * f / (f - d_o);
        let focal_y = if focal_raw.is_finite() {
            focal_raw.clamp(-intercept_clamp, intercept_clamp)
        } else {
            intercept_clamp
        };
        let at = |lens_y: f64| lens_y + slope * x_end;
        return [
            RayPath {
                kind: RayKind::Parallel,
                points: SmallVec::from_slice(&[tip, DVec2::new(0.0, h), DVec2::new(x_end, at(h))]),
                exit_slope: slope,
                lens_point: DVec2::new(0.0, h),
            },
            RayPath {
                kind: RayKind::Central,
                points: SmallVec::from_slice(&[
                    tip,
                    DVec2::new(0.0, central_lens_y),
                    DVec2::new(x_end, at(central_lens_y)),
                ]),
                exit_slope: slope,
                lens_point: DVec2::new(0.0, central_lens_y),
            },
            RayPath {
                kind: RayKind::Focal,
                points: SmallVec::from_slice(&[
                    tip,
                    DVec2::new(0.0, focal_y),
                    DVec2::new(x_end, at(focal_y)),
                ]),
                exit_slope: slope,
                lens_point: DVec2::new(0.0, focal_y),
            },
        ];
    }

    // Finite image. Slopes are stored once per ray; forward segments and
    // backward virtual extensions both read the stored value.
    let parallel_slope = -h / f;
    let central_slope = -h / d_o;
    let focal_lens_y = h * f / (f - d_o);

    [
        RayPath {
            kind: RayKind::Parallel,
            points: SmallVec::from_slice(&[
                tip,
                DVec2::new(0.0, h),
                DVec2::new(x_end, h + parallel_slope * x_end),
            ]),
            exit_slope: parallel_slope,
            lens_point: DVec2::new(0.0, h),
        },
        RayPath {
            kind: RayKind::Central,
            points: SmallVec::from_slice(&[
                tip,
                DVec2::new(0.0, 0.0),
                DVec2::new(x_end, central_slope * x_end),
            ]),
            exit_slope: central_slope,
            lens_point: DVec2::new(0.0, 0.0),
        },
        RayPath {
            kind: RayKind::Focal,
            points: SmallVec::from_slice(&[
                tip,
                DVec2::new(0.0, focal_lens_y),
                DVec2::new(x_end, focal_lens_y),
            ]),
            exit_slope: 0.0,
            lens_point: DVec2::new(0.0, focal_lens_y),
        },
    ]
}

/// Housing half-height: smallest half-extent enclosing every lens-plane
/// intercept plus a margin, clamped so the glyph neither collapses nor
/// grows without bound near the singularity.
fn lens_half_height(rays: &[RayPath; 3]) -> f64 {
    let spread = rays
        .iter()
        .map(|r| r.lens_point.y.abs())
        .fold(0.0_f64, f64::max);
    (spread + LENS_INTERCEPT_MARGIN_MM).clamp(LENS_HALF_HEIGHT_MIN_MM, LENS_HALF_HEIGHT_MAX_MM)
}

/// Derive the full frame geometry from the sliders and the canvas size.
pub fn derive_scene(params: &OpticalParameters, canvas_w_px: f64, canvas_h_px: f64) -> SceneGeometry {
    let solution = ImageSolution::solve(params);
    let aspect = canvas_w_px / canvas_h_px;
    let viewport = derive_viewport(params, aspect);
    let rays = principal_rays(params, &solution, viewport.x_max);
    let lens_half_height = lens_half_height(&rays);

    let h = OBJECT_HEIGHT_MM;
    let (image_tip, image_tip_drawn) = if solution.kind == ImageKind::AtInfinity {
        (None, None)
    } else {
        let m = solution.magnification;
        let drawn_m = m.clamp(-MAGNIFICATION_DRAW_CLAMP, MAGNIFICATION_DRAW_CLAMP);
        (
            Some(DVec2::new(solution.image_distance, m * h)),
            Some(DVec2::new(solution.image_distance, drawn_m * h)),
        )
    };

    SceneGeometry {
        params: *params,
        solution,
        object_tip: DVec2::new(-params.object_distance_mm, h),
        image_tip,
        image_tip_drawn,
        rays,
        lens_half_height,
        eye_x: eye_world_x(params),
        viewport,
    }
}
