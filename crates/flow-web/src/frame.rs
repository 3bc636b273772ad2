//! The animation driver: one requestAnimationFrame tick paints the trail
//! wash, then updates and draws every particle, then reschedules itself —
//! unless the loop has been cancelled.

use crate::surface::Surface;
use anyhow::anyhow;
use flow_core::{EngineConfig, ParticlePool, PointerState};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const FRAME_REPORT_EVERY: Duration = Duration::from_secs(5);

pub struct FrameContext {
    surface: Surface,
    pool: ParticlePool,
    pointer: Rc<RefCell<PointerState>>,
    config: EngineConfig,
    rng: rand::rngs::ThreadRng,
    frames: u32,
    last_report: Instant,
}

impl FrameContext {
    pub fn new(
        surface: Surface,
        pool: ParticlePool,
        pointer: Rc<RefCell<PointerState>>,
        config: EngineConfig,
    ) -> Self {
        Self {
            surface,
            pool,
            pointer,
            config,
            rng: rand::thread_rng(),
            frames: 0,
            last_report: Instant::now(),
        }
    }

    /// One full tick: fade wash, then update+draw per particle in pool order.
    /// Everything here is synchronous; the next tick is only scheduled after
    /// this returns.
    pub fn frame(&mut self) {
        self.surface.paint_trail_wash(self.config.trail_fade_alpha);
        let pointer = self.pointer.borrow().position();
        let Self {
            surface,
            pool,
            config,
            rng,
            ..
        } = self;
        pool.tick(pointer, config.speed_multiplier, rng, |p| {
            surface.draw_particle(p, &config.color)
        });

        self.frames += 1;
        let elapsed = self.last_report.elapsed();
        if elapsed >= FRAME_REPORT_EVERY {
            log::debug!(
                "{:.1} fps over the last {:.0}s",
                self.frames as f64 / elapsed.as_secs_f64(),
                elapsed.as_secs_f64()
            );
            self.frames = 0;
            self.last_report = Instant::now();
        }
    }

    /// Container size changed: resize the surface and rebuild the pool over
    /// the new bounds. Runs between ticks like any other event callback.
    pub fn resize(&mut self, logical_w: f64, logical_h: f64) {
        self.surface.configure(logical_w, logical_h);
        self.pool.reset(
            self.config.particle_count,
            logical_w as f32,
            logical_h as f32,
            &mut self.rng,
        );
    }
}

/// Handle to a running loop. At most one loop is live per engine instance;
/// `cancel` synchronously prevents any further tick from executing.
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        // Drop the closure to break its self-referential cycle.
        self.tick.borrow_mut().take();
        log::debug!("animation loop cancelled");
    }
}

/// Start the self-rescheduling frame loop. Fails if the host has no
/// frame-scheduling primitive; a failed start leaves nothing running.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<LoopHandle> {
    let cancelled = Rc::new(Cell::new(false));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let cancelled_tick = cancelled.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // Checked both before the work and before the reschedule so a
        // cancellation from inside an event callback takes effect this frame.
        if cancelled_tick.get() {
            return;
        }
        ctx.borrow_mut().frame();
        if cancelled_tick.get() {
            return;
        }
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));

    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let first = window
        .request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        .map_err(|e| anyhow!("requestAnimationFrame unavailable: {:?}", e))?;
    raf_id.set(Some(first));

    Ok(LoopHandle {
        cancelled,
        raf_id,
        tick,
    })
}
