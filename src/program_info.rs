use log::warn;

use crate::error::InitError;
use crate::gl::GlContext;
use crate::shader::{ShaderProgram, MODEL_VIEW_MATRIX, PROJECTION_MATRIX, VERTEX_POSITION};

pub struct AttribLocations {
    pub vertex_position: u32,
}

/// `None` means the uniform was optimized out; uploads to it are no-ops.
pub struct UniformLocations<C: GlContext> {
    pub projection_matrix: Option<C::UniformLocation>,
    pub model_view_matrix: Option<C::UniformLocation>,
}

/// A linked program together with the locations looked up on it.
pub struct ProgramInfo<C: GlContext> {
    pub program: ShaderProgram<C>,
    pub attrib_locations: AttribLocations,
    pub uniform_locations: UniformLocations<C>,
}

impl<C: GlContext> ProgramInfo<C> {
    pub fn resolve(ctx: &C, program: ShaderProgram<C>) -> Result<Self, InitError> {
        let handle = program.handle();

        let vertex_position = u32::try_from(ctx.attrib_location(handle, VERTEX_POSITION))
            .map_err(|_| InitError::MissingAttribute { name: VERTEX_POSITION })?;

        let uniform_locations = UniformLocations {
            projection_matrix: uniform(ctx, handle, PROJECTION_MATRIX),
            model_view_matrix: uniform(ctx, handle, MODEL_VIEW_MATRIX),
        };

        Ok(ProgramInfo {
            program,
            attrib_locations: AttribLocations { vertex_position },
            uniform_locations,
        })
    }
}

fn uniform<C: GlContext>(ctx: &C, program: &C::Program, name: &str) -> Option<C::UniformLocation> {
    let location = ctx.uniform_location(program, name);
    if location.is_none() {
        warn!("uniform `{name}` is not active; uploads to it will be ignored");
    }
    location
}
