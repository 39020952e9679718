// Shared tuning constants for the optical bench. World units are millimetres
// unless a name says otherwise; the HMD physical parameters are in metres.

// Slider domain
pub const FOCAL_MIN_MM: f64 = 10.0;
pub const FOCAL_MAX_MM: f64 = 200.0;
pub const FOCAL_DEFAULT_MM: f64 = 40.0;
pub const DISTANCE_MIN_MM: f64 = 5.0;
pub const DISTANCE_MAX_MM: f64 = 500.0;
pub const DISTANCE_DEFAULT_MM: f64 = 100.0;

// Near-infinity band around d_o = f: relative term plus an absolute floor.
// Visual-stability heuristics, not physics.
pub const AT_FOCUS_ABS_MM: f64 = 3.0;
pub const AT_FOCUS_REL: f64 = 0.05;

// Raw image distances beyond this magnitude classify as "at infinity".
pub const IMAGE_DISTANCE_FINITE_LIMIT_MM: f64 = 1e6;

// Drawn geometry
pub const OBJECT_HEIGHT_MM: f64 = 40.0; // display/object arrow height
pub const FOCAL_RAY_INTERCEPT_CLAMP: f64 = 5.0; // × object height, band only
pub const MAGNIFICATION_DRAW_CLAMP: f64 = 6.0; // image arrow height only

// Lens housing half-height: intercept envelope + margin, clamped
pub const LENS_INTERCEPT_MARGIN_MM: f64 = 12.0;
pub const LENS_HALF_HEIGHT_MIN_MM: f64 = 40.0;
pub const LENS_HALF_HEIGHT_MAX_MM: f64 = 80.0;

// Viewport derivation. The image position never feeds these bounds.
pub const DISPLAY_MARGIN_MM: f64 = 20.0;
pub const EYE_X_HMD_MIN_MM: f64 = 80.0;
pub const EYE_X_HMD_FOCAL_COEFF: f64 = 0.6;
pub const EYE_X_PROJECTOR_MM: f64 = 60.0;
pub const VERTICAL_EXTENT_MM: f64 = 90.0;
pub const VIEWPORT_MIN_WIDTH_MM: f64 = 300.0;
pub const VIEWPORT_MIN_HEIGHT_MM: f64 = 180.0;
pub const VIEWPORT_PAD_X_FRACTION: f64 = 0.08;
pub const VIEWPORT_PAD_Y_FRACTION: f64 = 0.12;

// Default HMD physical parameters (metres, Cardboard V2)
pub const HMD_FOCAL_LENGTH_M: f64 = 0.043;
pub const HMD_LENS_DISPLAY_M: f64 = 0.042;
pub const HMD_EYE_RELIEF_M: f64 = 0.018;
pub const HMD_IPD_M: f64 = 0.065;
pub const HMD_DISPLAY_WIDTH_M: f64 = 0.12096;
pub const HMD_DISPLAY_HEIGHT_M: f64 = 0.068;

// Barrel distortion coefficients (Cardboard v2.2)
pub const DISTORTION_K1: f64 = 0.34;
pub const DISTORTION_K2: f64 = 0.55;
