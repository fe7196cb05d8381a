//! Canvas-2D drawing: a low-opacity background fill that leaves fading
//! motion trails, then one batched disc path per color group.

use std::f64::consts::TAU;

use crate::frame::FrameContext;

pub fn draw(app: &FrameContext) {
    let ctx = &app.ctx;
    let scale = app.sim.pulse_scale();

    // Not a full clear: repainting at low opacity is what accumulates the
    // glowing trails.
    ctx.set_fill_style_str(&app.trail_css);
    ctx.fill_rect(0.0, 0.0, app.viewport.x as f64, app.viewport.y as f64);

    for (batch, css) in app.batches.iter().zip(&app.batch_css) {
        ctx.set_fill_style_str(css);
        ctx.begin_path();
        for &i in &batch.indices {
            let p = &app.sim.particles[i];
            let r = (p.size * scale) as f64;
            let x = p.pos.x as f64;
            let y = p.pos.y as f64;
            // moveTo detaches each disc's subpath so the arcs don't connect.
            ctx.move_to(x + r, y);
            let _ = ctx.arc(x, y, r, 0.0, TAU);
        }
        ctx.fill();
    }
}
