//! Event wiring with explicit teardown.
//!
//! Every listener is held in a [`ListenerGuard`] that unregisters it on drop,
//! so stopping the starfield releases everything it hooked up.

use crate::dom;
use anyhow::Result;
use starfield_core::Starfield;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerGuard {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(dom::js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Hook up pointer tracking on the canvas and viewport resizes on the window.
pub fn wire_handlers(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: Rc<RefCell<Starfield>>,
) -> Result<Vec<ListenerGuard>> {
    let mut guards = Vec::with_capacity(3);

    // pointermove: track in viewport coordinates, same space as star positions
    {
        let field = field.clone();
        guards.push(ListenerGuard::listen(
            canvas.as_ref(),
            "pointermove",
            move |ev: web::Event| {
                if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                    field
                        .borrow_mut()
                        .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
                }
            },
        )?);
    }

    // pointerleave: revert to "absent" and drop the trail immediately
    {
        let field = field.clone();
        guards.push(ListenerGuard::listen(
            canvas.as_ref(),
            "pointerleave",
            move |_ev: web::Event| {
                field.borrow_mut().clear_pointer();
            },
        )?);
    }

    // resize: retarget the canvas backing store and rebuild stars + edges.
    // Both happen inside this one handler invocation, so no frame can observe
    // a star set and an edge list from different viewport sizes.
    {
        let field = field.clone();
        let canvas = canvas.clone();
        guards.push(ListenerGuard::listen(
            window.as_ref(),
            "resize",
            move |_ev: web::Event| {
                if let Some(w) = web::window() {
                    if let Ok((width, height)) = dom::viewport_size(&w) {
                        canvas.set_width(width as u32);
                        canvas.set_height(height as u32);
                        field.borrow_mut().resize(width, height);
                    }
                }
            },
        )?);
    }

    Ok(guards)
}
