//! Device-signal wiring: pointer, touch, resize, visibility, keyboard.
//!
//! Every listener is retained in a `Subscriptions` registry rather than
//! forgotten, so teardown can detach all of them; repeated mount/unmount
//! cycles must not leak subscriptions.

use instant::Instant;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::frame::{self, FrameContext, TickHandle};
use crate::input::{self, TrackedPointer};
use crate::{dom, overlay};

struct Sub {
    target: web::EventTarget,
    kind: &'static str,
    func: js_sys::Function,
    // Keeps the closure alive for as long as the listener is attached.
    _closure: Box<dyn Any>,
}

/// A detachable set of DOM event subscriptions.
#[derive(Default)]
pub struct Subscriptions {
    subs: Vec<Sub>,
}

impl Subscriptions {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let func: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        if target
            .add_event_listener_with_callback(kind, &func)
            .is_err()
        {
            log::warn!("[events] failed to attach {kind} listener");
        }
        self.subs.push(Sub {
            target: target.clone(),
            kind,
            func,
            _closure: Box::new(closure),
        });
    }

    /// Remove every attached listener; used on shutdown.
    pub fn detach_all(&mut self) {
        for sub in self.subs.drain(..) {
            let _ = sub
                .target
                .remove_event_listener_with_callback(sub.kind, &sub.func);
        }
    }

    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }
}

#[derive(Clone)]
pub struct EventWiring {
    pub canvas: web::HtmlCanvasElement,
    pub app: Rc<RefCell<FrameContext>>,
    pub pointer: Rc<RefCell<TrackedPointer>>,
}

pub fn wire_device_signals(subs: &mut Subscriptions, w: &EventWiring, tick: &TickHandle) {
    let window = match web::window() {
        Some(window) => window,
        None => return,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };

    // Pointer events cover mouse and pen; the dedicated touch handlers below
    // cover hosts that still deliver touch without pointer events. Moving
    // activates repulsion, releasing deactivates it but keeps the last
    // coordinates so the force decays in place.
    {
        let pointer = w.pointer.clone();
        let canvas = w.canvas.clone();
        subs.add(&window, "pointermove", move |ev| {
            let ev: web::PointerEvent = ev.unchecked_into();
            let pos = input::mouse_canvas_px(&ev, &canvas);
            let mut p = pointer.borrow_mut();
            p.x = pos.x;
            p.y = pos.y;
            p.active = true;
        });
    }
    {
        let pointer = w.pointer.clone();
        let canvas = w.canvas.clone();
        subs.add(&window, "pointerdown", move |ev| {
            let ev: web::PointerEvent = ev.unchecked_into();
            let pos = input::mouse_canvas_px(&ev, &canvas);
            {
                let mut p = pointer.borrow_mut();
                p.x = pos.x;
                p.y = pos.y;
                p.active = true;
            }
            if let Some(doc) = dom::window_document() {
                overlay::hide(&doc);
            }
        });
    }
    {
        let pointer = w.pointer.clone();
        subs.add(&window, "pointerup", move |_ev| {
            pointer.borrow_mut().active = false;
        });
    }

    for kind in ["touchstart", "touchmove"] {
        let pointer = w.pointer.clone();
        let canvas = w.canvas.clone();
        subs.add(&window, kind, move |ev| {
            let ev: web::TouchEvent = ev.unchecked_into();
            if let Some(pos) = input::touch_canvas_px(&ev, &canvas) {
                let mut p = pointer.borrow_mut();
                p.x = pos.x;
                p.y = pos.y;
                p.active = true;
            }
        });
    }
    {
        let pointer = w.pointer.clone();
        subs.add(&window, "touchend", move |_ev| {
            pointer.borrow_mut().active = false;
        });
    }

    // Resize: backing store and simulation center update immediately, the
    // resample itself waits for the debouncer's quiet period.
    {
        let app = w.app.clone();
        let canvas = w.canvas.clone();
        subs.add(&window, "resize", move |_ev| {
            let (css_w, css_h, dpr) = dom::sync_canvas_backing_size(&canvas);
            let mut ctx = app.borrow_mut();
            ctx.set_viewport(css_w, css_h, dpr);
            ctx.resize_debounce.signal(Instant::now());
        });
    }

    // Visibility: a hidden surface stops scheduling frames entirely.
    {
        let app = w.app.clone();
        let tick = tick.clone();
        subs.add(&document, "visibilitychange", move |_ev| {
            let hidden = dom::window_document().map(|d| d.hidden()).unwrap_or(false);
            if hidden {
                log::info!("[events] surface hidden, frame loop paused");
                app.borrow_mut().running = false;
            } else {
                log::info!("[events] surface visible, frame loop resumed");
                frame::resume(&app, &tick);
            }
        });
    }

    {
        subs.add(&window, "keydown", move |ev| {
            let ev: web::KeyboardEvent = ev.unchecked_into();
            if ev.key() == "h" || ev.key() == "H" {
                if let Some(doc) = dom::window_document() {
                    overlay::toggle(&doc);
                }
            }
        });
    }
}
