use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use app_core::constants::{RESIZE_DEBOUNCE_MS, TRAIL_ALPHA};
use app_core::{batch_by_color, ColorBatch, Debouncer, Particle, SimState, Theme};

use crate::config::ConfigCell;
use crate::input::TrackedPointer;
use crate::{raster, render};

/// A fully built replacement store, published by a sampler and consumed
/// atomically at the top of the next frame. A partially built store is never
/// visible to the loop.
pub struct StoreSwap {
    pub particles: Vec<Particle>,
    pub theme: Theme,
}

pub type SwapSlot = Rc<RefCell<Option<StoreSwap>>>;
pub type TickHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Everything the frame loop owns: simulation state, draw batches, the swap
/// slot async resamples publish into, and scheduling flags.
pub struct FrameContext {
    pub sim: SimState,
    pub batches: Vec<ColorBatch>,
    pub batch_css: Vec<String>,
    pub trail_css: String,
    pub theme: Theme,
    /// CSS-pixel viewport; the simulation runs in this space and the 2D
    /// context carries the devicePixelRatio transform.
    pub viewport: Vec2,
    pub ctx: web::CanvasRenderingContext2d,
    pub pointer: Rc<RefCell<TrackedPointer>>,
    pub config: Rc<RefCell<ConfigCell>>,
    pub pending: SwapSlot,
    pub resize_debounce: Debouncer,
    pub running: bool,
    pub scheduled: bool,
    pub raf_id: Option<i32>,
}

impl FrameContext {
    pub fn new(
        ctx: web::CanvasRenderingContext2d,
        theme: Theme,
        config: Rc<RefCell<ConfigCell>>,
        pointer: Rc<RefCell<TrackedPointer>>,
        viewport: Vec2,
    ) -> Self {
        Self {
            sim: SimState::new(viewport * 0.5),
            batches: Vec::new(),
            batch_css: Vec::new(),
            trail_css: trail_fill(&theme),
            theme,
            viewport,
            ctx,
            pointer,
            config,
            pending: Rc::new(RefCell::new(None)),
            resize_debounce: Debouncer::new(Duration::from_millis(RESIZE_DEBOUNCE_MS)),
            running: true,
            scheduled: false,
            raf_id: None,
        }
    }

    /// Install a freshly sampled store: replace the particles wholesale and
    /// rebuild the color batches and their CSS fill styles.
    fn install(&mut self, swap: StoreSwap) {
        self.theme = swap.theme;
        self.trail_css = trail_fill(&self.theme);
        self.sim.replace_particles(swap.particles);
        self.batches = batch_by_color(&self.sim.particles);
        self.batch_css = self.batches.iter().map(|b| b.color.to_css()).collect();
        log::info!(
            "[frame] store installed: {} particles in {} color batches",
            self.sim.particles.len(),
            self.batches.len()
        );
    }

    /// One frame of synchronous work: swap in a pending store, react to
    /// config changes and debounced resizes, snapshot the pointer, advance
    /// the simulation, draw.
    pub fn frame(&mut self) {
        let swap = self.pending.borrow_mut().take();
        if let Some(swap) = swap {
            self.install(swap);
        }

        let config_dirty = self.config.borrow_mut().take_dirty();
        let resize_due = self.resize_debounce.fire_ready(Instant::now());
        if config_dirty || resize_due {
            raster::request_resample(self);
        }

        {
            let raw = *self.pointer.borrow();
            self.sim.pointer.pos = Vec2::new(raw.x, raw.y);
            self.sim.pointer.active = raw.active;
        }
        self.sim.step();
        render::draw(self);
    }

    /// Apply a new CSS viewport size. The simulation recenters immediately;
    /// the resample itself is debounced by the caller. The context transform
    /// is reapplied because a backing-store resize resets it.
    pub fn set_viewport(&mut self, width: f32, height: f32, dpr: f64) {
        self.viewport = Vec2::new(width, height);
        self.sim.center = Vec2::new(width * 0.5, height * 0.5);
        let _ = self.ctx.scale(dpr, dpr);
    }
}

fn trail_fill(theme: &Theme) -> String {
    theme
        .background
        .with_alpha((TRAIL_ALPHA * 255.0) as u8)
        .to_css()
}

/// Drive the frame loop from requestAnimationFrame. The tick reschedules
/// itself only while `running`; when the surface is hidden it stops
/// scheduling entirely and `resume` restarts it.
pub fn start_loop(app: Rc<RefCell<FrameContext>>) -> TickHandle {
    let tick: TickHandle = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let app_tick = app.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut ctx = app_tick.borrow_mut();
            if !ctx.running {
                ctx.scheduled = false;
                ctx.raf_id = None;
                return;
            }
            ctx.frame();
        }
        let id = request_frame(&tick_clone);
        app_tick.borrow_mut().raf_id = id;
    }) as Box<dyn FnMut()>));

    {
        let mut ctx = app.borrow_mut();
        ctx.scheduled = true;
    }
    let id = request_frame(&tick);
    app.borrow_mut().raf_id = id;
    tick
}

pub fn request_frame(tick: &TickHandle) -> Option<i32> {
    let window = web::window()?;
    let cell = tick.borrow();
    let cb = cell.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

/// Restart scheduling after the surface becomes visible again.
pub fn resume(app: &Rc<RefCell<FrameContext>>, tick: &TickHandle) {
    {
        let mut ctx = app.borrow_mut();
        ctx.running = true;
        if ctx.scheduled {
            return;
        }
        ctx.scheduled = true;
    }
    let id = request_frame(tick);
    app.borrow_mut().raf_id = id;
}
