// Off-viewport image indicators.
//
// When the computed image lies outside the stable viewport, the renderer
// substitutes a colored gradient strip on the relevant edge. The color is
// keyed to the image type, never to the side: virtual images glow purple,
// real images glow green, so a left glow is always purple and a right glow
// always green under this bench's sign convention.

use smallvec::SmallVec;

use super::geometry::{SceneGeometry, Viewport};
use super::optics::ImageKind;

pub const GLOW_VIRTUAL_COLOR: &str = "#c77dff";
pub const GLOW_REAL_COLOR: &str = "#57d98f";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowEdge {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Clone, Debug)]
pub struct EdgeGlow {
    pub edge: GlowEdge,
    pub color: &'static str,
    pub text: String,
}

fn glow_color(kind: ImageKind) -> &'static str {
    match kind {
        ImageKind::Virtual => GLOW_VIRTUAL_COLOR,
        _ => GLOW_REAL_COLOR,
    }
}

fn kind_name(kind: ImageKind) -> &'static str {
    match kind {
        ImageKind::Virtual => "virtual image",
        _ => "real image",
    }
}

/// Classify which edges need a glow this frame. Empty inside the
/// near-infinity band; the image is nowhere, so nothing points at it.
pub fn compute_glows(scene: &SceneGeometry) -> SmallVec<[EdgeGlow; 2]> {
    let mut glows = SmallVec::new();
    let solution = &scene.solution;
    let vp: &Viewport = &scene.viewport;
    if solution.kind == ImageKind::AtInfinity {
        return glows;
    }

    let d_i = solution.image_distance;
    let distance_mm = d_i.abs();
    if solution.kind == ImageKind::Virtual && d_i < vp.x_min {
        glows.push(EdgeGlow {
            edge: GlowEdge::Left,
            color: glow_color(solution.kind),
            text: format!("\u{2190} {} {:.0} mm", kind_name(solution.kind), distance_mm),
        });
    }
    if solution.kind == ImageKind::Real && d_i > vp.x_max {
        glows.push(EdgeGlow {
            edge: GlowEdge::Right,
            color: glow_color(solution.kind),
            text: format!("{} {:.0} mm \u{2192}", kind_name(solution.kind), distance_mm),
        });
    }

    // Vertical checks use the magnification-clamped drawn height, since
    // that is what the arrow on screen actually does.
    if let Some(tip) = scene.image_tip_drawn {
        if tip.y > vp.y_max {
            glows.push(EdgeGlow {
                edge: GlowEdge::Top,
                color: glow_color(solution.kind),
                text: format!("\u{2191} {} {:.0} mm", kind_name(solution.kind), distance_mm),
            });
        } else if tip.y < vp.y_min {
            glows.push(EdgeGlow {
                edge: GlowEdge::Bottom,
                color: glow_color(solution.kind),
                text: format!("\u{2193} {} {:.0} mm", kind_name(solution.kind), distance_mm),
            });
        }
    }

    glows
}
