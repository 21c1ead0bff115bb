//! One-shot frame: each step takes what it needs explicitly so they can be
//! driven and checked separately.

mod matrices;

pub use matrices::{aspect_ratio, projection, Matrices};

use log::debug;
use web_sys::WebGlRenderingContext as GL;

use crate::config::SceneConfig;
use crate::geometry::{Buffers, POSITION_COMPONENTS, SQUARE_VERTEX_COUNT};
use crate::gl::GlContext;
use crate::program_info::ProgramInfo;

pub fn clear_frame<C: GlContext>(ctx: &C, config: &SceneConfig) {
    let [r, g, b, a] = config.clear_color;
    ctx.clear_color(r, g, b, a);
    ctx.clear_depth(config.clear_depth);
    ctx.enable(GL::DEPTH_TEST);
    // near things obscure far things
    ctx.depth_func(GL::LEQUAL);
    ctx.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
}

/// Points the position attribute at the square buffer: two tightly packed
/// floats per vertex.
pub fn bind_position_attribute<C: GlContext>(ctx: &C, info: &ProgramInfo<C>, buffers: &Buffers<C>) {
    let index = info.attrib_locations.vertex_position;
    ctx.bind_buffer(GL::ARRAY_BUFFER, &buffers.position);
    ctx.vertex_attrib_pointer(index, POSITION_COMPONENTS, GL::FLOAT, false, 0, 0);
    ctx.enable_vertex_attrib_array(index);
}

pub fn upload_uniforms<C: GlContext>(ctx: &C, info: &ProgramInfo<C>, matrices: &Matrices) {
    let uniforms = &info.uniform_locations;
    ctx.uniform_matrix4fv(
        uniforms.projection_matrix.as_ref(),
        false,
        &matrices.projection.to_cols_array(),
    );
    ctx.uniform_matrix4fv(
        uniforms.model_view_matrix.as_ref(),
        false,
        &matrices.model_view.to_cols_array(),
    );
}

pub fn draw_square<C: GlContext>(ctx: &C) {
    ctx.draw_arrays(GL::TRIANGLE_STRIP, 0, SQUARE_VERTEX_COUNT);
}

/// Draws the square once and returns the matrices that were uploaded.
pub fn draw_scene<C: GlContext>(
    ctx: &C,
    info: &ProgramInfo<C>,
    buffers: &Buffers<C>,
    config: &SceneConfig,
) -> Matrices {
    clear_frame(ctx, config);

    let aspect = aspect_ratio(ctx.client_size());
    let matrices = Matrices::compute(aspect, config);

    bind_position_attribute(ctx, info, buffers);
    ctx.use_program(info.program.handle());
    upload_uniforms(ctx, info, &matrices);
    draw_square(ctx);

    debug!("drew square at aspect {aspect:.3}");
    matrices
}
