use thiserror::Error;

use crate::gl::ShaderStage;

/// Everything that can stop the startup path. The `Display` text is what
/// the page alerts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InitError {
    #[error("Unable to initialize WebGL. Your browser or machine may not support it.")]
    ContextUnavailable,
    #[error("An error occurred compiling the shaders: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("Unable to initialize the shader program: {log}")]
    ProgramLink { log: String },
    #[error("unable to create {resource}")]
    ResourceCreation { resource: &'static str },
    #[error("attribute `{name}` is not active in the shader program")]
    MissingAttribute { name: &'static str },
    #[error("invalid scene configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<InitError> for wasm_bindgen::JsValue {
    fn from(err: InitError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
