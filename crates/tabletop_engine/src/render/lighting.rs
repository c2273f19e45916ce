//! Lighting rig
//!
//! The fragment stage iterates a fixed array of [`LIGHT_COUNT`] light records
//! on every fragment, so all slots are uploaded every frame. Unused slots are
//! zeroed rather than skipped.

use crate::foundation::math::Vec3;
use crate::render::backend::UniformSink;

/// Number of light records the fragment stage loops over
pub const LIGHT_COUNT: usize = 4;

/// One entry of the shader's `lightSources` array
#[derive(Debug, Clone, PartialEq)]
pub struct LightSource {
    /// World-space position
    pub position: Vec3,
    /// Ambient contribution color
    pub ambient_color: Vec3,
    /// Diffuse contribution color
    pub diffuse_color: Vec3,
    /// Specular contribution color
    pub specular_color: Vec3,
    /// Highlight falloff exponent
    pub focal_strength: f32,
    /// Highlight intensity multiplier
    pub specular_intensity: f32,
}

impl LightSource {
    /// A slot that contributes nothing
    pub fn disabled() -> Self {
        Self {
            position: Vec3::zeros(),
            ambient_color: Vec3::zeros(),
            diffuse_color: Vec3::zeros(),
            specular_color: Vec3::zeros(),
            focal_strength: 1.0,
            specular_intensity: 0.0,
        }
    }

    /// Whether this slot adds any light at all
    pub fn is_enabled(&self) -> bool {
        self.specular_intensity > 0.0
            || self.ambient_color != Vec3::zeros()
            || self.diffuse_color != Vec3::zeros()
            || self.specular_color != Vec3::zeros()
    }
}

/// The static light rig for the tabletop scene
///
/// - slot 0: dim neutral back light for rim separation
/// - slot 1: stronger red front light that tints the visible faces
/// - slots 2-3: disabled
pub fn scene_lights() -> [LightSource; LIGHT_COUNT] {
    [
        LightSource {
            position: Vec3::new(0.0, 7.0, -12.0),
            ambient_color: Vec3::repeat(0.008),
            diffuse_color: Vec3::repeat(0.120),
            specular_color: Vec3::repeat(0.070),
            focal_strength: 28.0,
            specular_intensity: 0.60,
        },
        LightSource {
            position: Vec3::new(0.0, 4.0, 9.0),
            ambient_color: Vec3::new(0.004, 0.000, 0.000),
            diffuse_color: Vec3::new(0.420, 0.010, 0.010),
            specular_color: Vec3::new(0.120, 0.010, 0.010),
            focal_strength: 20.0,
            specular_intensity: 0.85,
        },
        LightSource::disabled(),
        LightSource::disabled(),
    ]
}

/// Uniform name of one field of one light record
pub fn light_uniform(index: usize, field: &str) -> String {
    format!("lightSources[{index}].{field}")
}

/// Upload every light slot
pub fn apply_lights(sink: &mut dyn UniformSink, lights: &[LightSource; LIGHT_COUNT]) {
    for (index, light) in lights.iter().enumerate() {
        sink.set_vec3(&light_uniform(index, "position"), light.position);
        sink.set_vec3(&light_uniform(index, "ambientColor"), light.ambient_color);
        sink.set_vec3(&light_uniform(index, "diffuseColor"), light.diffuse_color);
        sink.set_vec3(&light_uniform(index, "specularColor"), light.specular_color);
        sink.set_float(&light_uniform(index, "focalStrength"), light.focal_strength);
        sink.set_float(&light_uniform(index, "specularIntensity"), light.specular_intensity);
    }
    log::trace!("Uploaded {} light slots", LIGHT_COUNT);
}
