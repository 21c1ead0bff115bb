use std::f32::consts::FRAC_PI_4;

use crate::error::InitError;

/// Fixed parameters of the scene. `Default` reproduces the classic demo:
/// black background, 45° field of view, square six units in front of the
/// camera.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// `id` of the `<canvas>` element to draw into.
    pub canvas_id: String,
    pub clear_color: [f32; 4],
    pub clear_depth: f32,
    /// Vertical field of view in radians.
    pub field_of_view: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub model_translation: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_id: String::from("glcanvas"),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            clear_depth: 1.0,
            field_of_view: FRAC_PI_4,
            z_near: 0.1,
            z_far: 100.0,
            model_translation: [0.0, 0.0, -6.0],
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), InitError> {
        let reason = if !(self.field_of_view > 0.0 && self.field_of_view < std::f32::consts::PI) {
            format!("field of view {} is outside (0, π)", self.field_of_view)
        } else if !(self.z_near > 0.0) {
            format!("near plane {} must be positive", self.z_near)
        } else if !(self.z_far > self.z_near) {
            format!("far plane {} must lie beyond near plane {}", self.z_far, self.z_near)
        } else {
            return Ok(());
        };
        Err(InitError::InvalidConfig { reason })
    }
}
