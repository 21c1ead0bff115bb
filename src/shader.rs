use log::{debug, error};

use crate::error::InitError;
use crate::gl::{GlContext, ShaderStage};

pub const SQUARE_VERT: &str = include_str!("shaders/square.vert");
pub const SQUARE_FRAG: &str = include_str!("shaders/square.frag");

pub const VERTEX_POSITION: &str = "aVertexPosition";
pub const PROJECTION_MATRIX: &str = "uProjectionMatrix";
pub const MODEL_VIEW_MATRIX: &str = "uModelViewMatrix";

/// A linked program. Only `ShaderProgram::build` hands these out, so holding
/// one means linking succeeded.
pub struct ShaderProgram<C: GlContext> {
    program: C::Program,
}

impl<C: GlContext> ShaderProgram<C> {
    /// Compiles both stages and links them. The first failure ends the
    /// attempt: a broken vertex stage means the fragment stage is never
    /// compiled.
    pub fn build(ctx: &C, vertex_src: &str, fragment_src: &str) -> Result<Self, InitError> {
        let vertex = compile_stage(ctx, ShaderStage::Vertex, vertex_src)?;
        let fragment = compile_stage(ctx, ShaderStage::Fragment, fragment_src)?;

        let program = ctx.create_program().ok_or(InitError::ResourceCreation {
            resource: "shader program",
        })?;
        ctx.attach_shader(&program, &vertex);
        ctx.attach_shader(&program, &fragment);
        ctx.link_program(&program);

        if !ctx.program_link_status(&program) {
            let log = info_log(ctx.program_info_log(&program));
            error!("program link failed: {log}");
            return Err(InitError::ProgramLink { log });
        }

        debug!("shader program linked");
        Ok(ShaderProgram { program })
    }

    /// The demo's own white-square shaders.
    pub fn square(ctx: &C) -> Result<Self, InitError> {
        Self::build(ctx, SQUARE_VERT, SQUARE_FRAG)
    }

    pub fn handle(&self) -> &C::Program {
        &self.program
    }
}

fn compile_stage<C: GlContext>(
    ctx: &C,
    stage: ShaderStage,
    source: &str,
) -> Result<C::Shader, InitError> {
    let shader = ctx.create_shader(stage).ok_or(InitError::ResourceCreation {
        resource: "shader",
    })?;
    ctx.shader_source(&shader, source);
    ctx.compile_shader(&shader);

    if !ctx.shader_compile_status(&shader) {
        let log = info_log(ctx.shader_info_log(&shader));
        error!("{stage:?} shader failed to compile: {log}");
        ctx.delete_shader(&shader);
        return Err(InitError::ShaderCompile { stage, log });
    }
    Ok(shader)
}

// Drivers may report failure with an empty log.
fn info_log(log: Option<String>) -> String {
    match log {
        Some(log) if !log.trim().is_empty() => log,
        _ => String::from("no diagnostic reported"),
    }
}
