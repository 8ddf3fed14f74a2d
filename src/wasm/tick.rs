use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

use super::render::Renderer;
use crate::animation::AnimationState;
use crate::error::{BadgeError, Result};

type Frame = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request(frame: &Frame) -> Result<()> {
    let window = window().ok_or(BadgeError::NoWindow)?;
    let slot = frame.borrow();
    if let Some(cb) = slot.as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// Runs draw, then animate, every animation frame for the life of the page.
pub fn start(mut renderer: Renderer) -> Result<()> {
    // `f` holds the animation-frame closure so that it can keep scheduling
    // itself. The `Option` lets us build the closure first and then hand it
    // a handle to its own slot.
    let f: Frame = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut state = AnimationState::new();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = request(&f) {
            log::error!("animation loop stopped: {err}");
            return;
        }
        renderer.draw(&state);
        if state.tick() {
            log::debug!("badge moved to {:?}", state.station());
        }
        renderer.refresh(&state);
    }) as Box<dyn FnMut()>));

    request(&g)
}
