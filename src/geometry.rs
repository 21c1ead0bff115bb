use log::debug;
use web_sys::WebGlRenderingContext as GL;

use crate::error::InitError;
use crate::gl::GlContext;

/// Components per vertex in `SQUARE_POSITIONS`.
pub const POSITION_COMPONENTS: i32 = 2;
pub const SQUARE_VERTEX_COUNT: i32 = 4;

/// Unit square around the origin, ordered for a triangle strip.
#[rustfmt::skip]
pub const SQUARE_POSITIONS: [f32; 8] = [
     1.0,  1.0,
    -1.0,  1.0,
     1.0, -1.0,
    -1.0, -1.0,
];

pub struct Buffers<C: GlContext> {
    pub position: C::Buffer,
}

/// Creates the position buffer and uploads the square once (STATIC_DRAW).
pub fn init_buffers<C: GlContext>(ctx: &C) -> Result<Buffers<C>, InitError> {
    let position = ctx.create_buffer().ok_or(InitError::ResourceCreation {
        resource: "position buffer",
    })?;
    ctx.bind_buffer(GL::ARRAY_BUFFER, &position);
    ctx.buffer_data_f32(GL::ARRAY_BUFFER, &SQUARE_POSITIONS, GL::STATIC_DRAW);
    debug!("uploaded {} square vertices", SQUARE_VERTEX_COUNT);

    Ok(Buffers { position })
}
