use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Sync the canvas backing store to its CSS size times devicePixelRatio so
/// discs stay crisp on high-density screens. Returns the CSS size and the
/// ratio; the caller rescales the 2D context (a backing resize wipes it).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f32, f32, f64) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let css_w = rect.width() as f32;
    let css_h = rect.height() as f32;
    canvas.set_width(((css_w as f64 * dpr) as u32).max(1));
    canvas.set_height(((css_h as f64 * dpr) as u32).max(1));
    (css_w, css_h, dpr)
}
