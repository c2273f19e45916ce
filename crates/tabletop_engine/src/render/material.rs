//! Material presets
//!
//! Each preset is a plain [`Material`] record keyed by [`MaterialPreset`].
//! Selecting a preset fully determines the five `material.*` uniforms.
//!
//! ## Ambient compensation
//!
//! The fragment stage adds the material's ambient term inside its light loop,
//! once per light record, instead of once per fragment. The authored
//! `ambient_strength` is the total ambient contribution we want, so it is
//! divided by [`LIGHT_COUNT`] before upload. This only holds while the shader
//! keeps that loop; a shader that applies ambient once must be paired with
//! an undivided upload.

use crate::foundation::math::{Vec3, Vec4};
use crate::render::backend::UniformSink;
use crate::render::lighting::LIGHT_COUNT;
use crate::render::uniforms;
use std::fmt;
use std::str::FromStr;

/// Solid color used for surfaces whose texture or material is missing
pub const FALLBACK_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 1.0];

/// Phong reflectance constants as authored
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Intended total ambient strength
    pub ambient_strength: f32,
    /// Ambient color
    pub ambient_color: Vec3,
    /// Diffuse color
    pub diffuse_color: Vec3,
    /// Specular color
    pub specular_color: Vec3,
    /// Specular exponent
    pub shininess: f32,
}

impl Material {
    /// Ambient strength as it must be uploaded
    pub fn uploaded_ambient(&self) -> f32 {
        uploaded_ambient(self.ambient_strength)
    }
}

/// Divide an authored ambient strength by the shader's light count
#[allow(clippy::cast_precision_loss)]
pub fn uploaded_ambient(authored: f32) -> f32 {
    authored / LIGHT_COUNT as f32
}

/// The closed set of material presets used by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum MaterialPreset {
    /// Mug body
    StainedGlass,
    /// Mug base and handle
    Rubber,
    /// Floor and backdrop
    Wood,
    /// Can, coaster, ball
    Metal,
    /// Wood block (rough, low shine)
    Brick,
}

impl MaterialPreset {
    /// Every preset
    pub const ALL: [Self; 5] = [
        Self::StainedGlass,
        Self::Rubber,
        Self::Wood,
        Self::Metal,
        Self::Brick,
    ];

    /// Lookup tag
    pub fn tag(self) -> &'static str {
        match self {
            Self::StainedGlass => "stainedglass",
            Self::Rubber => "rubber",
            Self::Wood => "wood",
            Self::Metal => "metal",
            Self::Brick => "brick",
        }
    }

    /// The authored reflectance record
    pub fn material(self) -> Material {
        let (ambient_strength, diffuse, specular, shininess) = match self {
            Self::StainedGlass => (0.12, 0.80, 0.10, 18.0),
            Self::Rubber => (0.28, 1.00, 0.05, 10.0),
            Self::Wood => (0.22, 1.00, 0.10, 18.0),
            Self::Metal => (0.10, 0.95, 0.28, 38.0),
            Self::Brick => (0.20, 0.95, 0.08, 12.0),
        };

        Material {
            ambient_strength,
            ambient_color: Vec3::repeat(1.0),
            diffuse_color: Vec3::repeat(diffuse),
            specular_color: Vec3::repeat(specular),
            shininess,
        }
    }
}

impl fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A material tag outside the preset table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown material tag: {0}")]
pub struct UnknownMaterial(pub String);

impl FromStr for MaterialPreset {
    type Err = UnknownMaterial;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.tag() == tag)
            .ok_or_else(|| UnknownMaterial(tag.to_string()))
    }
}

/// Upload a preset's five material uniforms
pub fn apply_material(sink: &mut dyn UniformSink, preset: MaterialPreset) {
    let material = preset.material();
    sink.set_float(uniforms::AMBIENT_STRENGTH, material.uploaded_ambient());
    sink.set_vec3(uniforms::AMBIENT_COLOR, material.ambient_color);
    sink.set_vec3(uniforms::DIFFUSE_COLOR, material.diffuse_color);
    sink.set_vec3(uniforms::SPECULAR_COLOR, material.specular_color);
    sink.set_float(uniforms::SHININESS, material.shininess);
}

/// Upload a preset by tag
///
/// An unknown tag is logged and the surface falls back to flat gray with
/// texturing disabled. Returns the preset that was applied, if any.
pub fn apply_material_tag(sink: &mut dyn UniformSink, tag: &str) -> Option<MaterialPreset> {
    match tag.parse::<MaterialPreset>() {
        Ok(preset) => {
            apply_material(sink, preset);
            Some(preset)
        }
        Err(err) => {
            log::warn!("{err}; drawing with fallback color");
            apply_solid_color(sink, Vec4::from(FALLBACK_COLOR));
            None
        }
    }
}

/// Disable texturing and draw with a solid RGBA color
pub fn apply_solid_color(sink: &mut dyn UniformSink, color: Vec4) {
    sink.set_bool(uniforms::USE_TEXTURE, false);
    sink.set_vec4(uniforms::OBJECT_COLOR, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{RecordingBackend, UniformValue};

    #[test]
    fn test_uploaded_ambient_is_quarter_of_authored_for_every_preset() {
        for preset in MaterialPreset::ALL {
            let mut backend = RecordingBackend::new();
            apply_material(&mut backend, preset);

            let authored = preset.material().ambient_strength;
            assert_eq!(
                backend.uniform(uniforms::AMBIENT_STRENGTH),
                Some(UniformValue::Float(authored / 4.0)),
                "{preset}"
            );
        }
    }

    #[test]
    fn test_preset_writes_exactly_five_uniforms() {
        let mut backend = RecordingBackend::new();
        apply_material(&mut backend, MaterialPreset::Metal);

        assert_eq!(backend.uniform_writes().len(), 5);
        assert_eq!(
            backend.uniform(uniforms::SHININESS),
            Some(UniformValue::Float(38.0))
        );
        assert_eq!(
            backend.uniform(uniforms::SPECULAR_COLOR),
            Some(UniformValue::Vec3([0.28, 0.28, 0.28]))
        );
    }

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for preset in MaterialPreset::ALL {
            assert_eq!(preset.tag().parse::<MaterialPreset>(), Ok(preset));
        }
        assert!("velvet".parse::<MaterialPreset>().is_err());
    }

    #[test]
    fn test_unknown_tag_falls_back_to_gray() {
        let mut backend = RecordingBackend::new();
        let applied = apply_material_tag(&mut backend, "velvet");

        assert_eq!(applied, None);
        assert_eq!(backend.uniform(uniforms::USE_TEXTURE), Some(UniformValue::Int(0)));
        assert_eq!(
            backend.uniform(uniforms::OBJECT_COLOR),
            Some(UniformValue::Vec4(FALLBACK_COLOR))
        );
        assert!(backend.uniform(uniforms::AMBIENT_STRENGTH).is_none());
    }
}
