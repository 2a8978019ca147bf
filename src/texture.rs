use crate::constants::*;
use std::f64::consts::{FRAC_PI_2, TAU};
use wasm_bindgen::JsCast;
use web_sys as web;

pub use crate::core::face::{CoinFace, FaceTextureCache};

fn face_colors(face: CoinFace) -> (&'static str, &'static str) {
    match face {
        CoinFace::Heads => (HEADS_BG, HEADS_TEXT),
        CoinFace::Tails => (TAILS_BG, TAILS_TEXT),
    }
}

/// Rasterize a coin face on an offscreen 2D canvas and return its RGBA
/// pixels: flat fill, radial sheen, the label rotated upright, and a thin
/// decorative ring near the rim. Returns `None` if the 2D context is
/// unavailable (texture simply keeps its previous contents).
pub fn render_face(document: &web::Document, face: CoinFace, label: &str) -> Option<Vec<u8>> {
    let (bg, fg) = face_colors(face);
    let size = TEXTURE_SIZE as f64;
    let half = size / 2.0;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    canvas.set_width(TEXTURE_SIZE);
    canvas.set_height(TEXTURE_SIZE);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;

    ctx.set_fill_style_str(bg);
    ctx.fill_rect(0.0, 0.0, size, size);

    // Radial sheen: lighter center, darker rim.
    if let Ok(grad) = ctx.create_radial_gradient(half, half, 50.0, half, half, 650.0) {
        _ = grad.add_color_stop(0.0, "rgba(255,255,255,0.25)");
        _ = grad.add_color_stop(1.0, "rgba(0,0,0,0.08)");
        ctx.set_fill_style_canvas_gradient(&grad);
        ctx.fill_rect(0.0, 0.0, size, size);
    }

    // Label reads upright once the face is on the upright coin.
    _ = ctx.translate(half, half);
    _ = ctx.rotate(-FRAC_PI_2);

    ctx.set_fill_style_str(fg);
    ctx.set_font(FACE_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_shadow_color("rgba(0,0,0,0.2)");
    ctx.set_shadow_blur(8.0);
    ctx.set_shadow_offset_y(4.0);
    _ = ctx.fill_text_with_max_width(&label.to_uppercase(), 0.0, 0.0, FACE_TEXT_MAX_WIDTH);

    ctx.set_stroke_style_str(fg);
    ctx.set_line_width(FACE_RING_WIDTH);
    ctx.set_global_alpha(FACE_RING_ALPHA);
    ctx.begin_path();
    _ = ctx.arc(0.0, 0.0, FACE_RING_RADIUS, 0.0, TAU);
    ctx.stroke();

    let image = ctx
        .get_image_data(0.0, 0.0, size, size)
        .map_err(|e| log::error!("get_image_data error: {:?}", e))
        .ok()?;
    Some(image.data().0)
}
