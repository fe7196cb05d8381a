//! Shape resampling for the three display modes.
//!
//! Heart is sampled directly. Text and image modes render through an
//! offscreen canvas first, then the core scanner turns pixels into
//! particles. Image decoding is asynchronous; the frame loop keeps running
//! against the previous store and the finished one is published into the
//! swap slot. Every failure path degrades to heart mode rather than
//! erroring to the caller.

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use app_core::sampler::{self, Bitmap, DeviceClass, ScanOptions};
use app_core::Theme;

use crate::config::{DisplayMode, SceneConfig};
use crate::dom;
use crate::frame::{FrameContext, StoreSwap, SwapSlot};
use crate::themes;

/// Kick off a resample for the current configuration. Heart and text are
/// synchronous and publish immediately; image publishes from a spawned task
/// once the decode finishes.
pub fn request_resample(app: &mut FrameContext) {
    let config = app.config.borrow().config().clone();
    let theme = themes::resolve(&config.theme_id);
    let viewport = app.viewport;
    let pending = app.pending.clone();
    log::info!(
        "[raster] resample: mode={} theme={} viewport={:.0}x{:.0}",
        config.mode.name(),
        theme.id,
        viewport.x,
        viewport.y
    );

    match config.mode {
        DisplayMode::Heart => publish(&pending, heart_store(viewport, theme)),
        DisplayMode::Text => publish(&pending, text_store(&config, viewport, theme)),
        DisplayMode::Image => match config.image_url.clone() {
            Some(url) => spawn_local(image_task(url, viewport, theme, pending)),
            None => {
                log::warn!("[raster] image mode without a source, using heart");
                publish(&pending, heart_store(viewport, theme));
            }
        },
    }
}

fn publish(pending: &SwapSlot, swap: StoreSwap) {
    *pending.borrow_mut() = Some(swap);
}

fn heart_store(viewport: Vec2, theme: Theme) -> StoreSwap {
    let mut rng = rand::thread_rng();
    let particles = match sampler::sample_heart(viewport.x, viewport.y, &theme.colors, &mut rng) {
        Ok(particles) => particles,
        Err(err) => {
            log::error!("[raster] heart sampling failed: {err}");
            Vec::new()
        }
    };
    StoreSwap { particles, theme }
}

fn text_store(config: &SceneConfig, viewport: Vec2, theme: Theme) -> StoreSwap {
    let text = sampler::effective_text(&config.text);
    if let Some(bitmap) = rasterize_text(&text, viewport) {
        let device = DeviceClass::from_width(viewport.x);
        let top_left = -viewport * 0.5;
        let mut rng = rand::thread_rng();
        match sampler::scan_bitmap(
            &bitmap,
            top_left,
            ScanOptions::text(device),
            &theme.colors,
            &mut rng,
        ) {
            Ok(particles) => return StoreSwap { particles, theme },
            Err(err) => log::warn!("[raster] text scan failed ({err}), using heart"),
        }
    } else {
        log::warn!("[raster] text rasterization unavailable, using heart");
    }
    heart_store(viewport, theme)
}

/// Render the string centered on an offscreen canvas at the largest font
/// that fits the width budget, and hand the pixels back for scanning.
/// `None` when a 2D context cannot be created.
fn rasterize_text(text: &str, viewport: Vec2) -> Option<Bitmap> {
    let document = dom::window_document()?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;
    let width = viewport.x.max(1.0) as u32;
    let height = viewport.y.max(1.0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;

    let font_px = sampler::text_font_px(text, viewport.x);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font(&format!("bold {font_px:.0}px Arial, sans-serif"));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(text, (width / 2) as f64, (height / 2) as f64)
        .ok()?;

    let image = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .ok()?;
    Some(Bitmap::new(width, height, image.data().0))
}

async fn image_task(url: String, viewport: Vec2, theme: Theme, pending: SwapSlot) {
    let swap = match image_store(&url, viewport, theme.clone()).await {
        Ok(swap) => swap,
        Err(err) => {
            log::warn!("[raster] image sampling failed ({err:?}), using heart");
            heart_store(viewport, theme)
        }
    };
    publish(&pending, swap);
}

async fn image_store(url: &str, viewport: Vec2, theme: Theme) -> Result<StoreSwap, JsValue> {
    let img = load_image(url).await?;
    let (img_w, img_h) = sampler::image_fit(
        img.natural_width() as f32,
        img.natural_height() as f32,
        viewport.x,
        viewport.y,
    );
    if img_w < 1.0 || img_h < 1.0 {
        return Err(JsValue::from_str("image has no usable pixels"));
    }

    let document =
        dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(JsValue::from)?;
    canvas.set_width(img_w as u32);
    canvas.set_height(img_h as u32);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()
        .map_err(JsValue::from)?;

    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        &img,
        0.0,
        0.0,
        img_w as f64,
        img_h as f64,
    )?;
    let image = ctx.get_image_data(0.0, 0.0, img_w as f64, img_h as f64)?;
    let bitmap = Bitmap::new(img_w as u32, img_h as u32, image.data().0);

    let device = DeviceClass::from_width(viewport.x);
    let top_left = Vec2::new(-img_w * 0.5, -img_h * 0.5);
    let mut rng = rand::thread_rng();
    let particles = sampler::scan_bitmap(
        &bitmap,
        top_left,
        ScanOptions::image(device),
        &theme.colors,
        &mut rng,
    )
    .map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(StoreSwap { particles, theme })
}

/// Decode an image source into an element we can draw; resolves on load,
/// rejects on a decode error.
async fn load_image(url: &str) -> Result<web::HtmlImageElement, JsValue> {
    let img = web::HtmlImageElement::new()?;
    img.set_cross_origin(Some("anonymous"));
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    JsFuture::from(loaded).await?;
    Ok(img)
}
