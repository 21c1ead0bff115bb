use glam::{Mat4, Vec3};

use crate::config::SceneConfig;

/// Projection and model-view for one frame. Column-major, ready for
/// `uniformMatrix4fv` without transposing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrices {
    pub projection: Mat4,
    pub model_view: Mat4,
}

impl Matrices {
    pub fn compute(aspect: f32, config: &SceneConfig) -> Self {
        Self {
            projection: projection(aspect, config),
            model_view: Mat4::from_translation(Vec3::from_array(config.model_translation)),
        }
    }
}

/// OpenGL-convention perspective (depth mapped to [-1, 1]).
pub fn projection(aspect: f32, config: &SceneConfig) -> Mat4 {
    Mat4::perspective_rh_gl(config.field_of_view, aspect, config.z_near, config.z_far)
}

/// Width over height; a collapsed surface falls back to square.
pub fn aspect_ratio((width, height): (u32, u32)) -> f32 {
    if width == 0 || height == 0 {
        return 1.0;
    }
    width as f32 / height as f32
}
