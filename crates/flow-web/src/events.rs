//! Event wiring for the backdrop: pointer tracking and container resize.
//!
//! Unlike fire-and-forget `Closure::forget()` wiring, every listener here is
//! held in an [`EventHook`] that unregisters itself on drop, so tearing the
//! engine down cannot leave callbacks firing against a disposed surface.

use crate::frame::FrameContext;
use crate::surface;
use flow_core::PointerState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener that is removed when the hook is dropped.
pub struct EventHook {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventHook {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for EventHook {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Subscribe the engine's three external signals: pointer moves and leaves on
/// the canvas, and window resizes (which reconfigure the surface and rebuild
/// the pool).
pub fn wire(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
    ctx: Rc<RefCell<FrameContext>>,
) -> Vec<EventHook> {
    let mut hooks = Vec::with_capacity(3);

    {
        let pointer_m = pointer.clone();
        let canvas_m = canvas.clone();
        hooks.push(EventHook::attach(
            canvas.as_ref(),
            "pointermove",
            move |ev: web::Event| {
                if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                    let rect = canvas_m.get_bounding_client_rect();
                    pointer_m.borrow_mut().moved(
                        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                        Vec2::new(rect.left() as f32, rect.top() as f32),
                    );
                }
            },
        ));
    }

    {
        let pointer_l = pointer;
        hooks.push(EventHook::attach(
            canvas.as_ref(),
            "pointerleave",
            move |_ev: web::Event| {
                pointer_l.borrow_mut().leave();
            },
        ));
    }

    {
        let ctx_r = ctx;
        let canvas_r = canvas.clone();
        hooks.push(EventHook::attach(
            window.as_ref(),
            "resize",
            move |_ev: web::Event| {
                let (w, h) = surface::measure(&canvas_r);
                ctx_r.borrow_mut().resize(w, h);
            },
        ));
    }

    hooks
}
