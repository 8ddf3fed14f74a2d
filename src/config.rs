//! Startup settings shared by the wasm entry point and the renderer.

use log::Level;

/// Names the page and shader program must provide, plus a few knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub canvas_id: &'static str,
    pub vertex_shader_id: &'static str,
    pub fragment_shader_id: &'static str,
    pub position_attribute: &'static str,
    pub color_attribute: &'static str,
    pub model_view_uniform: &'static str,
    pub clear_color: [f32; 4],
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_id: "myGLCanvas",
            vertex_shader_id: "shader-vs",
            fragment_shader_id: "shader-fs",
            position_attribute: "aVertexPosition",
            color_attribute: "aVertexColor",
            model_view_uniform: "uMVMatrix",
            clear_color: [1.0, 1.0, 1.0, 1.0],
            log_level: Level::Info,
        }
    }
}

impl Config {
    /// Applies overrides from a page query string such as `?log=debug`.
    /// Unknown keys and unparsable values are ignored.
    pub fn with_query(mut self, query: &str) -> Self {
        if let Some(level) = log_level_from_query(query) {
            self.log_level = level;
        }
        self
    }
}

/// Extracts the `log` parameter from a query string.
pub fn log_level_from_query(query: &str) -> Option<Level> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "log")
        .and_then(|(_, value)| value.parse().ok())
}
