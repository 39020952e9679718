//! Canvas-2D scene renderer.
//!
//! Pure consumer of the per-frame [`SceneGeometry`]: draws the bench in a
//! fixed layer order, registers label requests with the frame's
//! [`LabelPlacer`], and substitutes edge glows for off-viewport images.

use glam::DVec2;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::*;
use crate::core::constants::{FOCAL_MAX_MM, FOCAL_MIN_MM};
use crate::core::geometry::{derive_scene, RayKind, SceneGeometry, WorldToCanvas};
use crate::core::glow::{compute_glows, GlowEdge, GLOW_VIRTUAL_COLOR};
use crate::core::labels::LabelPlacer;
use crate::core::optics::ImageKind;
use crate::panel::SharedPanel;

type Ctx = web::CanvasRenderingContext2d;

/// Leader line from a displaced label back to its anchor; collected while
/// placing and drawn near the end of the layer order.
struct Leader {
    from: DVec2,
    to: DVec2,
}

pub fn draw_panel(panel: &SharedPanel) {
    let p = panel.borrow();
    let w = p.canvas.width() as f64;
    let h = p.canvas.height() as f64;
    if w < 1.0 || h < 1.0 {
        return;
    }
    let scene = derive_scene(&p.params, w, h);
    draw_scene(&p.ctx, w, h, &scene);
}

fn draw_scene(ctx: &Ctx, w: f64, h: f64, scene: &SceneGeometry) {
    let map = WorldToCanvas::new(&scene.viewport, w, h);
    let mut placer = LabelPlacer::new();
    let mut leaders: Vec<Leader> = Vec::new();

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, w, h);

    draw_axis(ctx, &map, w);
    draw_light_hint(ctx);
    draw_housing(ctx, &map, scene);
    draw_lens_guide(ctx, &map, scene);
    draw_lens(ctx, &map, scene);
    draw_focal_marks(ctx, &map, scene, &mut placer, &mut leaders);
    draw_display(ctx, &map, scene, &mut placer, &mut leaders);
    draw_object_arrow(ctx, &map, scene);
    draw_image(ctx, &map, scene, &mut placer, &mut leaders);
    draw_rays(ctx, &map, scene);
    draw_eye(ctx, &map, scene);
    draw_captions(ctx, &map, scene, w, &mut placer, &mut leaders);
    draw_glows(ctx, scene, w, h, &mut placer, &mut leaders);
    draw_leaders(ctx, &leaders);
    draw_equation(ctx, scene, h);
}

// ---------------- helpers ----------------

fn dash(ctx: &Ctx, on: f64, off: f64) {
    let pattern = js_sys::Array::of2(&JsValue::from_f64(on), &JsValue::from_f64(off));
    _ = ctx.set_line_dash(&pattern);
}

fn solid(ctx: &Ctx) {
    _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn line(ctx: &Ctx, from: DVec2, to: DVec2) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}

/// Straight arrow with a filled head at `to`. Pixel coordinates.
fn arrow(ctx: &Ctx, from: DVec2, to: DVec2, color: &str, width: f64) {
    ctx.set_stroke_style_str(color);
    ctx.set_fill_style_str(color);
    ctx.set_line_width(width);
    line(ctx, from, to);
    let dir = (to - from).normalize_or_zero();
    if dir == DVec2::ZERO {
        return;
    }
    let side = DVec2::new(-dir.y, dir.x);
    let base = to - dir * ARROW_HEAD_PX;
    ctx.begin_path();
    ctx.move_to(to.x, to.y);
    ctx.line_to(base.x + side.x * ARROW_HEAD_PX * 0.5, base.y + side.y * ARROW_HEAD_PX * 0.5);
    ctx.line_to(base.x - side.x * ARROW_HEAD_PX * 0.5, base.y - side.y * ARROW_HEAD_PX * 0.5);
    ctx.close_path();
    ctx.fill();
}

/// Place a label box through the frame's placer, draw it, and queue a
/// leader line when the placer had to move it off its anchor.
fn place_text(
    ctx: &Ctx,
    placer: &mut LabelPlacer,
    leaders: &mut Vec<Leader>,
    text: &str,
    anchor: DVec2,
    color: &str,
    font: &str,
) {
    ctx.set_font(font);
    let width = ctx
        .measure_text(text)
        .map(|m| m.width())
        .unwrap_or(7.0 * text.len() as f64)
        + LABEL_PAD_PX;
    let spot = placer.place(anchor.x, anchor.y, width, LABEL_BOX_HEIGHT_PX);
    if spot.displaced {
        leaders.push(Leader {
            from: anchor,
            to: DVec2::new(spot.x, spot.y),
        });
    }
    ctx.set_fill_style_str(color);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    _ = ctx.fill_text(text, spot.x, spot.y);
}

fn glow_rgba(color: &str, alpha: f64) -> String {
    let (r, g, b) = match color {
        GLOW_VIRTUAL_COLOR => (199, 125, 255),
        _ => (87, 217, 143),
    };
    format!("rgba({r}, {g}, {b}, {alpha})")
}

// ---------------- layers ----------------

fn draw_axis(ctx: &Ctx, map: &WorldToCanvas, w: f64) {
    let y = map.to_canvas(DVec2::ZERO).y;
    ctx.set_stroke_style_str(AXIS);
    ctx.set_line_width(AXIS_LINE_PX);
    solid(ctx);
    line(ctx, DVec2::new(0.0, y), DVec2::new(w, y));
}

fn draw_light_hint(ctx: &Ctx) {
    arrow(
        ctx,
        DVec2::new(24.0, 48.0),
        DVec2::new(86.0, 48.0),
        TEXT_DIM,
        1.2,
    );
    ctx.set_font(LABEL_FONT);
    ctx.set_fill_style_str(TEXT_DIM);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    _ = ctx.fill_text("light", 24.0, 34.0);
}

fn draw_housing(ctx: &Ctx, map: &WorldToCanvas, scene: &SceneGeometry) {
    ctx.set_fill_style_str(HOUSING);
    ctx.set_stroke_style_str(HOUSING_EDGE);
    ctx.set_line_width(1.5);
    solid(ctx);
    if scene.hmd_side() {
        // Goggle shell from just ahead of the lens to behind the eye.
        let half = scene.lens_half_height + 16.0;
        let tl = map.to_canvas(DVec2::new(-18.0, half));
        let br = map.to_canvas(DVec2::new(scene.eye_x, -half)) + DVec2::new(26.0, 0.0);
        rounded_rect(ctx, tl, br, 12.0);
        ctx.fill();
        ctx.stroke();
    } else {
        // Projector body: wide at the lens, tapering back over the display.
        let d_o = scene.params.object_distance_mm;
        let back_half = scene.object_tip.y + 22.0;
        let front_half = scene.lens_half_height + 10.0;
        let p0 = map.to_canvas(DVec2::new(-d_o - 14.0, -back_half));
        let p1 = map.to_canvas(DVec2::new(12.0, -front_half));
        let p2 = map.to_canvas(DVec2::new(12.0, front_half));
        let p3 = map.to_canvas(DVec2::new(-d_o - 14.0, back_half));
        ctx.begin_path();
        ctx.move_to(p0.x, p0.y);
        ctx.line_to(p1.x, p1.y);
        ctx.line_to(p2.x, p2.y);
        ctx.line_to(p3.x, p3.y);
        ctx.close_path();
        ctx.fill();
        ctx.stroke();
    }
}

fn rounded_rect(ctx: &Ctx, tl: DVec2, br: DVec2, r: f64) {
    let (x0, y0, x1, y1) = (tl.x, tl.y, br.x, br.y);
    ctx.begin_path();
    ctx.move_to(x0 + r, y0);
    ctx.line_to(x1 - r, y0);
    ctx.quadratic_curve_to(x1, y0, x1, y0 + r);
    ctx.line_to(x1, y1 - r);
    ctx.quadratic_curve_to(x1, y1, x1 - r, y1);
    ctx.line_to(x0 + r, y1);
    ctx.quadratic_curve_to(x0, y1, x0, y1 - r);
    ctx.line_to(x0, y0 + r);
    ctx.quadratic_curve_to(x0, y0, x0 + r, y0);
    ctx.close_path();
}

fn draw_lens_guide(ctx: &Ctx, map: &WorldToCanvas, scene: &SceneGeometry) {
    let top = map.to_canvas(DVec2::new(0.0, scene.viewport.y_max));
    let bottom = map.to_canvas(DVec2::new(0.0, scene.viewport.y_min));
    ctx.set_stroke_style_str(AXIS);
    ctx.set_line_width(1.0);
    dash(ctx, 4.0, 4.0);
    line(ctx, top, bottom);
    solid(ctx);
}

fn draw_lens(ctx: &Ctx, map: &WorldToCanvas, scene: &SceneGeometry) {
    // Curvature keyed to normalized focal length: short focal lengths bulge.
    let t = ((scene.params.f_mm - FOCAL_MIN_MM) / (FOCAL_MAX_MM - FOCAL_MIN_MM)).clamp(0.0, 1.0);
    let bulge = map.px(4.0 + 10.0 * (1.0 - t)).max(3.0);
    let top = map.to_canvas(DVec2::new(0.0, scene.lens_half_height));
    let bottom = map.to_canvas(DVec2::new(0.0, -scene.lens_half_height));
    let mid_y = (top.y + bottom.y) / 2.0;
    ctx.set_fill_style_str(LENS_FILL);
    ctx.set_stroke_style_str(LENS_EDGE);
    ctx.set_line_width(1.8);
    ctx.begin_path();
    ctx.move_to(top.x, top.y);
    ctx.quadratic_curve_to(top.x + 2.0 * bulge, mid_y, bottom.x, bottom.y);
    ctx.quadratic_curve_to(top.x - 2.0 * bulge, mid_y, top.x, top.y);
    ctx.close_path();
    ctx.fill();
    ctx.stroke();
}

fn draw_focal_marks(
    ctx: &Ctx,
    map: &WorldToCanvas,
    scene: &SceneGeometry,
    placer: &mut LabelPlacer,
    leaders: &mut Vec<Leader>,
) {
    ctx.set_stroke_style_str(TEXT_DIM);
    ctx.set_line_width(1.2);
    solid(ctx);
    for (x, name) in [(-scene.params.f_mm, "F"), (scene.params.f_mm, "F\u{2032}")] {
        let p = map.to_canvas(DVec2::new(x, 0.0));
        line(ctx, p - DVec2::new(0.0, 5.0), p + DVec2::new(0.0, 5.0));
        place_text(
            ctx,
            placer,
            leaders,
            name,
            p + DVec2::new(0.0, 14.0),
            TEXT_DIM,
            LABEL_FONT,
        );
    }
}

fn draw_display(
    ctx: &Ctx,
    map: &WorldToCanvas,
    scene: &SceneGeometry,
    placer: &mut LabelPlacer,
    leaders: &mut Vec<Leader>,
) {
    let d_o = scene.params.object_distance_mm;
    let top = map.to_canvas(DVec2::new(-d_o - 2.5, scene.object_tip.y + 4.0));
    let bottom = map.to_canvas(DVec2::new(-d_o + 2.5, -4.0));
    ctx.set_fill_style_str("rgba(255, 209, 102, 0.22)");
    ctx.set_stroke_style_str(DISPLAY);
    ctx.set_line_width(1.2);
    ctx.fill_rect(top.x, top.y, bottom.x - top.x, bottom.y - top.y);
    ctx.stroke_rect(top.x, top.y, bottom.x - top.x, bottom.y - top.y);
    let anchor = map.to_canvas(DVec2::new(-d_o, 0.0)) + DVec2::new(0.0, 26.0);
    place_text(ctx, placer, leaders, "display", anchor, DISPLAY, LABEL_FONT);
}

fn draw_object_arrow(ctx: &Ctx, map: &WorldToCanvas, scene: &SceneGeometry) {
    let base = map.to_canvas(DVec2::new(-scene.params.object_distance_mm, 0.0));
    let tip = map.to_canvas(scene.object_tip);
    arrow(ctx, base, tip, OBJECT_ARROW, 2.4);
}

fn draw_image(
    ctx: &Ctx,
    map: &WorldToCanvas,
    scene: &SceneGeometry,
    placer: &mut LabelPlacer,
    leaders: &mut Vec<Leader>,
) {
    let Some(tip_drawn) = scene.image_tip_drawn else {
        return;
    };
    // Off-viewport images are represented by the edge glow instead.
    if !scene.viewport.contains(tip_drawn) {
        return;
    }
    let color = match scene.solution.kind {
        ImageKind::Virtual => IMAGE_VIRTUAL,
        _ => IMAGE_REAL,
    };
    let base = map.to_canvas(DVec2::new(tip_drawn.x, 0.0));
    let tip = map.to_canvas(tip_drawn);
    arrow(ctx, base, tip, color, 2.4);
    let name = match scene.solution.kind {
        ImageKind::Virtual => "virtual image",
        _ => "real image",
    };
    let text = format!("{name} \u{b7} {:.0} mm", scene.solution.image_distance.abs());
    let above = tip_drawn.y >= 0.0;
    let anchor = tip + DVec2::new(0.0, if above { -14.0 } else { 14.0 });
    place_text(ctx, placer, leaders, &text, anchor, color, LABEL_FONT);
}

fn ray_color(kind: RayKind) -> &'static str {
    match kind {
        RayKind::Parallel => RAY_PARALLEL,
        RayKind::Central => RAY_CENTRAL,
        RayKind::Focal => RAY_FOCAL,
    }
}

fn draw_rays(ctx: &Ctx, map: &WorldToCanvas, scene: &SceneGeometry) {
    ctx.set_line_width(RAY_LINE_PX);
    for ray in &scene.rays {
        ctx.set_stroke_style_str(ray_color(ray.kind));
        solid(ctx);
        ctx.begin_path();
        let mut points = ray.points.iter();
        if let Some(first) = points.next() {
            let p = map.to_canvas(*first);
            ctx.move_to(p.x, p.y);
        }
        for point in points {
            let p = map.to_canvas(*point);
            ctx.line_to(p.x, p.y);
        }
        ctx.stroke();
    }

    // Virtual regime: dashed backward extensions from the lens plane to the
    // image tip, traced at each ray's stored exit slope. The drawn arrow
    // height may be clamped; these are not.
    if scene.solution.kind != ImageKind::Virtual {
        return;
    }
    let d_i = scene.solution.image_distance;
    ctx.set_global_alpha(0.75);
    dash(ctx, 6.0, 5.0);
    for ray in &scene.rays {
        ctx.set_stroke_style_str(ray_color(ray.kind));
        let end = DVec2::new(
            d_i,
            ray.lens_point.y + ray.exit_slope * (d_i - ray.lens_point.x),
        );
        line(ctx, map.to_canvas(ray.lens_point), map.to_canvas(end));
    }
    solid(ctx);
    ctx.set_global_alpha(1.0);
}

fn draw_eye(ctx: &Ctx, map: &WorldToCanvas, scene: &SceneGeometry) {
    let at = map.to_canvas(DVec2::new(scene.eye_x, 0.0));
    ctx.save();
    _ = ctx.translate(at.x, at.y);
    if scene.hmd_side() {
        // Look back toward the lens.
        _ = ctx.rotate(std::f64::consts::PI);
    }
    ctx.set_stroke_style_str(EYE);
    ctx.set_fill_style_str(EYE);
    ctx.set_line_width(1.6);
    solid(ctx);
    ctx.begin_path();
    _ = ctx.ellipse(0.0, 0.0, 16.0, 9.0, 0.0, 0.0, std::f64::consts::TAU);
    ctx.stroke();
    ctx.begin_path();
    _ = ctx.arc(6.0, 0.0, 3.0, 0.0, std::f64::consts::TAU);
    ctx.fill();
    ctx.restore();
}

fn draw_captions(
    ctx: &Ctx,
    map: &WorldToCanvas,
    scene: &SceneGeometry,
    w: f64,
    placer: &mut LabelPlacer,
    leaders: &mut Vec<Leader>,
) {
    let device = if scene.hmd_side() {
        "Head-mounted display"
    } else {
        "Projector"
    };
    let anchor = map.to_canvas(DVec2::new(
        scene.eye_x * 0.5,
        scene.lens_half_height + 24.0,
    ));
    place_text(ctx, placer, leaders, device, anchor, TEXT_DIM, CAPTION_FONT);
    place_text(
        ctx,
        placer,
        leaders,
        scene.solution.regime_label(),
        DVec2::new(w / 2.0, 22.0),
        TEXT,
        CAPTION_FONT,
    );
}

fn draw_glows(
    ctx: &Ctx,
    scene: &SceneGeometry,
    w: f64,
    h: f64,
    placer: &mut LabelPlacer,
    leaders: &mut Vec<Leader>,
) {
    // Clearance may not exceed the half-extent on tiny canvases.
    let cx = GLOW_LABEL_CORNER_CLEARANCE_PX.min(w / 2.0);
    let cy = GLOW_LABEL_CORNER_CLEARANCE_PX.min(h / 2.0);
    for glow in compute_glows(scene) {
        let s = GLOW_STRIP_PX;
        let (from, to, rect) = match glow.edge {
            GlowEdge::Left => ((0.0, 0.0), (s, 0.0), (0.0, 0.0, s, h)),
            GlowEdge::Right => ((w, 0.0), (w - s, 0.0), (w - s, 0.0, s, h)),
            GlowEdge::Top => ((0.0, 0.0), (0.0, s), (0.0, 0.0, w, s)),
            GlowEdge::Bottom => ((0.0, h), (0.0, h - s), (0.0, h - s, w, s)),
        };
        let gradient = ctx.create_linear_gradient(from.0, from.1, to.0, to.1);
        _ = gradient.add_color_stop(0.0, &glow_rgba(glow.color, 0.55));
        _ = gradient.add_color_stop(1.0, &glow_rgba(glow.color, 0.0));
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(rect.0, rect.1, rect.2, rect.3);

        let anchor = match glow.edge {
            GlowEdge::Left => DVec2::new(s + 34.0, (h * 0.5).clamp(cy, h - cy)),
            GlowEdge::Right => DVec2::new(w - s - 34.0, (h * 0.5).clamp(cy, h - cy)),
            GlowEdge::Top => DVec2::new((w * 0.5).clamp(cx, w - cx), s + 14.0),
            GlowEdge::Bottom => DVec2::new((w * 0.5).clamp(cx, w - cx), h - s - 14.0),
        };
        place_text(ctx, placer, leaders, &glow.text, anchor, glow.color, CAPTION_FONT);
    }
}

fn draw_leaders(ctx: &Ctx, leaders: &[Leader]) {
    ctx.set_stroke_style_str(LEADER);
    ctx.set_fill_style_str(LEADER);
    ctx.set_line_width(1.0);
    dash(ctx, 2.0, 3.0);
    for leader in leaders {
        line(ctx, leader.from, leader.to);
        ctx.begin_path();
        _ = ctx.arc(leader.from.x, leader.from.y, 2.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
    solid(ctx);
}

fn draw_equation(ctx: &Ctx, scene: &SceneGeometry, h: f64) {
    let p = &scene.params;
    let d_i = scene.solution.image_distance;
    let d_i_text = if d_i.is_finite() {
        format!("{d_i:.0}")
    } else {
        "\u{221e}".to_string()
    };
    let text = format!(
        "1/f = 1/d\u{2092} + 1/d\u{1d62}   \u{2192}   1/{:.0} = 1/{:.0} + 1/{}",
        p.f_mm, p.object_distance_mm, d_i_text
    );
    ctx.set_font(EQUATION_FONT);
    ctx.set_fill_style_str(TEXT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("alphabetic");
    _ = ctx.fill_text(&text, 16.0, h - 18.0);
}
