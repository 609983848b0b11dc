//! The requestAnimationFrame update-and-draw chain.

use crate::render::CanvasRenderer;
use starfield_core::Starfield;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<Starfield>>,
    pub renderer: CanvasRenderer,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.field.borrow_mut().advance();
        self.renderer.render(&self.field.borrow());
    }
}

/// Run the frame chain until `running` goes false.
///
/// Once the flag is cleared no further frame is scheduled, which is the stop
/// path [`crate::StarfieldHandle::stop`] relies on.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, running: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
