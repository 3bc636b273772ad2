//! Canvas 2D surface management: backing-store sizing at device-pixel-ratio,
//! the trail-fade overwash, and particle painting.

use anyhow::anyhow;
use flow_core::constants::PARTICLE_SIZE;
use flow_core::Particle;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    logical_w: f64,
    logical_h: f64,
}

impl Surface {
    /// Acquire the 2D context. A canvas without one (already claimed by
    /// another context type, or an exotic host) is a startup failure; there
    /// is no degraded mode.
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("2d context error: {:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("context is not CanvasRenderingContext2d"))?;
        Ok(Self {
            canvas,
            ctx,
            logical_w: 0.0,
            logical_h: 0.0,
        })
    }

    /// Size the backing store to `logical * devicePixelRatio`, pin the CSS
    /// size to the logical dimensions, and install the DPR scale transform so
    /// every draw call below works in logical units. Must be re-run whenever
    /// the container's measured size changes (resizing the canvas resets the
    /// context transform).
    pub fn configure(&mut self, logical_w: f64, logical_h: f64) {
        let dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        self.logical_w = logical_w;
        self.logical_h = logical_h;
        self.canvas.set_width((logical_w * dpr).max(1.0) as u32);
        self.canvas.set_height((logical_h * dpr).max(1.0) as u32);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{logical_w}px"));
        let _ = style.set_property("height", &format!("{logical_h}px"));
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        log::debug!(
            "surface configured: {}x{} logical at dpr {}",
            logical_w,
            logical_h,
            dpr
        );
    }

    /// Translucent black overwash instead of a clear: old paint decays by a
    /// constant factor each tick, which is what produces the motion trails.
    /// Alpha 0 is fully transparent and paints nothing at all.
    pub fn paint_trail_wash(&self, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        self.ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {alpha})"));
        self.ctx.fill_rect(0.0, 0.0, self.logical_w, self.logical_h);
    }

    /// Paint one particle as a small square with the age-envelope opacity.
    pub fn draw_particle(&self, p: &Particle, color: &str) {
        self.ctx.set_global_alpha(p.alpha() as f64);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            p.pos.x as f64,
            p.pos.y as f64,
            PARTICLE_SIZE as f64,
            PARTICLE_SIZE as f64,
        );
        self.ctx.set_global_alpha(1.0);
    }

    #[inline]
    pub fn logical_size(&self) -> (f64, f64) {
        (self.logical_w, self.logical_h)
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

/// Measured CSS size of the canvas element, clamped to at least 1px so a
/// transiently zero-sized container never produces a degenerate pool.
pub fn measure(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width().max(1.0), rect.height().max(1.0))
}
