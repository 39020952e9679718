// Presentation constants used only by the web renderer. The math-side
// tuning constants live in `core/constants.rs`.

// Palette
pub const BACKGROUND: &str = "#0a0e18";
pub const AXIS: &str = "#3a4a63";
pub const HOUSING: &str = "#2a3550";
pub const HOUSING_EDGE: &str = "#47587a";
pub const LENS_FILL: &str = "rgba(120, 180, 255, 0.18)";
pub const LENS_EDGE: &str = "#78b4ff";
pub const DISPLAY: &str = "#ffd166";
pub const OBJECT_ARROW: &str = "#ffd166";
pub const IMAGE_REAL: &str = "#57d98f";
pub const IMAGE_VIRTUAL: &str = "#c77dff";
pub const RAY_PARALLEL: &str = "#ffb454";
pub const RAY_CENTRAL: &str = "#64d2ff";
pub const RAY_FOCAL: &str = "#ff7eb6";
pub const EYE: &str = "#e8ecf4";
pub const TEXT: &str = "#cfe0f4";
pub const TEXT_DIM: &str = "#8fa3c0";
pub const LEADER: &str = "#6d7f9c";

// Fonts
pub const LABEL_FONT: &str = "12px system-ui";
pub const CAPTION_FONT: &str = "13px system-ui";
pub const EQUATION_FONT: &str = "15px system-ui";

// Pixel metrics
pub const LABEL_BOX_HEIGHT_PX: f64 = 16.0;
pub const LABEL_PAD_PX: f64 = 6.0;
pub const GLOW_STRIP_PX: f64 = 46.0;
pub const GLOW_LABEL_CORNER_CLEARANCE_PX: f64 = 44.0;
pub const RAY_LINE_PX: f64 = 1.6;
pub const AXIS_LINE_PX: f64 = 1.0;
pub const ARROW_HEAD_PX: f64 = 7.0;

// Resize debounce, matching continuous window-resize behaviour.
pub const RESIZE_DEBOUNCE_MS: i32 = 120;
