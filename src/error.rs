use thiserror::Error;

/// Fatal startup failures. Nothing here is retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BadgeError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("canvas `{0}` not found")]
    CanvasNotFound(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("Failed to create WebGL context!")]
    ContextUnavailable,
    #[error("shader block `{0}` not found")]
    ShaderSourceMissing(String),
    #[error("shader block `{id}` has unknown type `{kind}`")]
    UnknownShaderType { id: String, kind: String },
    #[error("shader `{id}` failed to compile: {log}")]
    ShaderCompile { id: String, log: String },
    #[error("Failed to setup shaders: {0}")]
    ProgramLink(String),
    #[error("attribute `{0}` not found in program")]
    AttributeMissing(&'static str),
    #[error("uniform `{0}` not found in program")]
    UniformMissing(&'static str),
    #[error("failed to create {0}")]
    Create(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, BadgeError>;

#[cfg(target_arch = "wasm32")]
mod js {
    use super::BadgeError;
    use wasm_bindgen::JsValue;

    impl From<JsValue> for BadgeError {
        fn from(value: JsValue) -> Self {
            BadgeError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
        }
    }

    impl From<BadgeError> for JsValue {
        fn from(err: BadgeError) -> Self {
            js_sys::Error::new(&err.to_string()).into()
        }
    }
}
