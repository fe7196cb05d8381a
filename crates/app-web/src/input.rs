use glam::Vec2;
use web_sys as web;

/// Raw pointer/touch activation written directly by the event handlers.
///
/// No smoothing happens here; the simulation ramps its interaction force
/// from these fields once per frame. Release clears `active` but leaves the
/// last coordinates in place so the decaying force keeps repelling from the
/// last touch point.
#[derive(Default, Clone, Copy)]
pub struct TrackedPointer {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

/// Canvas-relative CSS-pixel position of a mouse-like event.
#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Canvas-relative CSS-pixel position of the first touch point, if any.
#[inline]
pub fn touch_canvas_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    let rect = canvas.get_bounding_client_rect();
    Some(Vec2::new(
        touch.client_x() as f32 - rect.left() as f32,
        touch.client_y() as f32 - rect.top() as f32,
    ))
}
