pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod transform;

pub use animation::{AnimationState, Station};
pub use config::Config;
pub use error::BadgeError;
pub use geometry::Badge;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::Config;
    use crate::error::BadgeError;

    mod context;
    mod render;
    mod shader;
    mod tick;

    #[cfg(test)]
    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
    }

    /// Entry point called once by the host page after the module loads.
    #[wasm_bindgen]
    pub fn startup() -> Result<(), JsValue> {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let config = Config::default().with_query(&search);
        console_log::init_with_level(config.log_level).ok();
        log::info!("badge starting, canvas `{}`", config.canvas_id);

        run(&config).map_err(|err| {
            log::error!("startup failed: {err}");
            alert(&err);
            JsValue::from(err)
        })
    }

    fn run(config: &Config) -> Result<(), BadgeError> {
        let window = web_sys::window().ok_or(BadgeError::NoWindow)?;
        let document = window.document().ok_or(BadgeError::NoDocument)?;
        let canvas = document
            .get_element_by_id(config.canvas_id)
            .ok_or_else(|| BadgeError::CanvasNotFound(config.canvas_id.to_owned()))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| BadgeError::NotACanvas(config.canvas_id.to_owned()))?;

        let surface = context::create(&canvas)?;
        let program = shader::setup(&surface.gl, &document, config)?;
        let renderer = render::Renderer::new(surface, program, config)?;
        tick::start(renderer)
    }

    fn alert(err: &BadgeError) {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(&err.to_string()).ok();
        }
    }
}
