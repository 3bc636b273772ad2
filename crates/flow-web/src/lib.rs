#![cfg(target_arch = "wasm32")]
//! WASM front-end for the flow-field backdrop.
//!
//! The host page calls [`mount_backdrop`] with a canvas id and the
//! configuration bundle; the returned handle owns the animation loop and all
//! event subscriptions and releases them on [`BackdropHandle::dispose`].

mod events;
mod frame;
mod surface;

use anyhow::anyhow;
use flow_core::{EngineConfig, ParticlePool, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("flow-web loaded");
    Ok(())
}

/// Owner of one mounted engine instance: the running loop plus the pointer
/// and resize subscriptions. Dropping or disposing it stops everything.
#[wasm_bindgen]
pub struct BackdropHandle {
    loop_handle: frame::LoopHandle,
    hooks: Vec<events::EventHook>,
}

#[wasm_bindgen]
impl BackdropHandle {
    /// Cancel the animation loop and unhook all listeners. Idempotent.
    pub fn dispose(&mut self) {
        self.loop_handle.cancel();
        self.hooks.clear();
        log::info!("backdrop disposed");
    }
}

impl Drop for BackdropHandle {
    fn drop(&mut self) {
        self.loop_handle.cancel();
    }
}

/// Build and start an engine on the canvas with the given id.
///
/// Fails (with nothing left running) if the configuration is out of range or
/// the environment lacks a usable canvas, 2D context, or frame scheduler.
/// Reconfiguring means disposing this handle and mounting a fresh one.
#[wasm_bindgen]
pub fn mount_backdrop(
    canvas_id: &str,
    color: String,
    trail_fade_alpha: f32,
    particle_count: u32,
    speed_multiplier: f32,
) -> Result<BackdropHandle, JsValue> {
    let config = EngineConfig {
        color,
        trail_fade_alpha,
        particle_count: particle_count as usize,
        speed_multiplier,
    };
    mount(canvas_id, config).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn mount(canvas_id: &str, config: EngineConfig) -> anyhow::Result<BackdropHandle> {
    config.validate()?;

    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow!("missing #{canvas_id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{canvas_id} is not a canvas"))?;

    let mut surface = surface::Surface::new(canvas.clone())?;
    let (w, h) = surface::measure(&canvas);
    surface.configure(w, h);

    let mut rng = rand::thread_rng();
    let pool = ParticlePool::new(config.particle_count, w as f32, h as f32, &mut rng);
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    log::info!(
        "backdrop mounting: {} particles over {:.0}x{:.0}",
        config.particle_count,
        w,
        h
    );

    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        surface,
        pool,
        pointer.clone(),
        config,
    )));
    let hooks = events::wire(&window, &canvas, pointer, ctx.clone());
    let loop_handle = frame::start_loop(ctx)?;

    Ok(BackdropHandle { loop_handle, hooks })
}
