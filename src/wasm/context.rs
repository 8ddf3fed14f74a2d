use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext as GL};

use crate::error::{BadgeError, Result};

const CONTEXT_NAMES: [&str; 2] = ["webgl", "experimental-webgl"];

/// A GL context plus the viewport size it was created with.
pub struct Surface {
    pub gl: GL,
    pub width: i32,
    pub height: i32,
}

/// Tries each context name in turn; the first one the browser hands back wins.
pub fn create(canvas: &HtmlCanvasElement) -> Result<Surface> {
    let gl = CONTEXT_NAMES
        .iter()
        .find_map(|name| match canvas.get_context(name) {
            Ok(Some(ctx)) => ctx.dyn_into::<GL>().ok(),
            Ok(None) => None,
            Err(err) => {
                log::debug!("get_context({name}) threw: {err:?}");
                None
            }
        })
        .ok_or(BadgeError::ContextUnavailable)?;

    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    log::debug!("GL context ready, viewport {width}x{height}");
    Ok(Surface { gl, width, height })
}
