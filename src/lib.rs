//! Draws a white square with WebGL, once.
//!
//! [`run`] is the whole startup path over any [`gl::GlContext`]; the wasm
//! start function below only finds the canvas and hands a browser context to
//! it.

pub mod config;
pub mod error;
pub mod geometry;
pub mod gl;
pub mod logging;
pub mod merge;
pub mod program_info;
pub mod scene;
pub mod shader;

use log::info;

use crate::config::SceneConfig;
use crate::error::InitError;
use crate::geometry::Buffers;
use crate::gl::GlContext;
use crate::program_info::ProgramInfo;
use crate::scene::Matrices;
use crate::shader::ShaderProgram;

/// What `run` built, kept alive for the rest of the process.
pub struct Scene<C: GlContext> {
    pub info: ProgramInfo<C>,
    pub buffers: Buffers<C>,
    pub matrices: Matrices,
}

/// Builds the program, resolves its locations, uploads the square and draws
/// one frame. Stops at the first failure.
pub fn run<C: GlContext>(ctx: &C, config: &SceneConfig) -> Result<Scene<C>, InitError> {
    config.validate()?;

    let program = ShaderProgram::square(ctx)?;
    let info = ProgramInfo::resolve(ctx, program)?;
    let buffers = geometry::init_buffers(ctx)?;
    let matrices = scene::draw_scene(ctx, &info, &buffers, config);

    info!("scene initialized");
    Ok(Scene {
        info,
        buffers,
        matrices,
    })
}

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use crate::config::SceneConfig;
    use crate::error::InitError;
    use crate::logging::{init_logging, LoggingConfig};

    mod context;
    mod render;

    pub use context::WebGl;
    pub use render::start;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        init_logging(LoggingConfig::default());

        let config = SceneConfig::default();
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        match find_canvas(&document, &config.canvas_id) {
            Some(canvas) => start(canvas, &config),
            None => {
                // without a <canvas> there is no context to acquire
                let err = InitError::ContextUnavailable;
                render::alert(&err);
                Err(err.into())
            }
        }
    }

    /// `None` when the id is missing or names something other than a canvas.
    pub fn find_canvas(document: &Document, id: &str) -> Option<HtmlCanvasElement> {
        document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()
    }
}
