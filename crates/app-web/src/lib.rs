#![cfg(target_arch = "wasm32")]
//! WASM frontend: canvas bootstrap, device-signal wiring, the frame loop and
//! the JS-facing configuration API. The UI chrome lives outside; it only
//! calls the exported setters below.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod config;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod raster;
mod render;
mod themes;

use config::{ConfigCell, DisplayMode};
use events::{EventWiring, Subscriptions};
use frame::{FrameContext, TickHandle};
use input::TrackedPointer;

struct App {
    ctx: Rc<RefCell<FrameContext>>,
    config: Rc<RefCell<ConfigCell>>,
    subs: Subscriptions,
    tick: TickHandle,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    if let Err(e) = init() {
        // Fatal for this instance, not the process: no animation starts.
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into()
        .map_err(|e| anyhow!(format!("{e:?}")))?;

    // Opaque backing store; the trail fill repaints every pixel anyway.
    let attrs = js_sys::Object::new();
    js_sys::Reflect::set(&attrs, &"alpha".into(), &false.into()).ok();
    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context_with_context_options("2d", &attrs)
        .map_err(|e| anyhow!(format!("{e:?}")))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow!(format!("{e:?}")))?;

    let (css_w, css_h, dpr) = dom::sync_canvas_backing_size(&canvas);

    let config = Rc::new(RefCell::new(ConfigCell::default()));
    let pointer = Rc::new(RefCell::new(TrackedPointer::default()));
    let theme = themes::default_theme();

    let app_ctx = Rc::new(RefCell::new(FrameContext::new(
        ctx2d,
        theme,
        config.clone(),
        pointer.clone(),
        Vec2::new(css_w, css_h),
    )));
    {
        let mut ctx = app_ctx.borrow_mut();
        ctx.set_viewport(css_w, css_h, dpr);
        ctx.running = !document.hidden();
        // First store before the first frame; the default heart mode needs
        // no async work.
        raster::request_resample(&mut ctx);
    }

    let tick = frame::start_loop(app_ctx.clone());
    let mut subs = Subscriptions::default();
    events::wire_device_signals(
        &mut subs,
        &EventWiring {
            canvas,
            app: app_ctx.clone(),
            pointer,
        },
        &tick,
    );
    log::info!("[init] wired {} device-signal listeners", subs.len());

    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            ctx: app_ctx,
            config,
            subs,
            tick,
        })
    });
    Ok(())
}

fn with_config(f: impl FnOnce(&mut ConfigCell)) {
    APP.with(|slot| {
        if let Some(app) = slot.borrow().as_ref() {
            f(&mut app.config.borrow_mut());
        }
    });
}

/// Switch the display mode ("heart" | "text" | "image"); unknown names are
/// ignored with a warning.
#[wasm_bindgen]
pub fn set_mode(mode: &str) {
    match DisplayMode::from_str(mode) {
        Some(mode) => with_config(|c| c.set_mode(mode)),
        None => log::warn!("[config] unknown mode {mode:?}"),
    }
}

/// Select a theme by id; unknown ids resolve to the default theme.
#[wasm_bindgen]
pub fn set_theme(id: &str) {
    with_config(|c| c.set_theme_id(id));
}

/// Set the text for text mode. Trimming, the length clamp and the default
/// string are applied at sampling time.
#[wasm_bindgen]
pub fn set_text(text: &str) {
    with_config(|c| c.set_text(text));
}

/// Set the image source (URL or data URI) for image mode.
#[wasm_bindgen]
pub fn set_image_url(url: &str) {
    with_config(|c| c.set_image_url(Some(url.to_string())));
}

#[wasm_bindgen]
pub fn clear_image() {
    with_config(|c| c.set_image_url(None));
}

/// Theme ids in table order, for the UI layer.
#[wasm_bindgen]
pub fn list_themes() -> Vec<JsValue> {
    themes::theme_ids()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Stop the frame loop, cancel the pending animation frame and detach every
/// device-event subscription. Safe to call more than once.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|slot| {
        if let Some(mut app) = slot.borrow_mut().take() {
            app.subs.detach_all();
            let raf_id = {
                let mut ctx = app.ctx.borrow_mut();
                ctx.running = false;
                ctx.scheduled = false;
                ctx.raf_id.take()
            };
            if let (Some(window), Some(id)) = (web::window(), raf_id) {
                let _ = window.cancel_animation_frame(id);
            }
            // Dropping the tick closure breaks the loop's Rc cycle.
            app.tick.borrow_mut().take();
            log::info!("app-web shut down");
        }
    });
}
