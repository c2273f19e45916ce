//! Uniform names shared with the shader program

/// Model matrix
pub const MODEL: &str = "model";
/// View matrix
pub const VIEW: &str = "view";
/// Projection matrix
pub const PROJECTION: &str = "projection";
/// Eye position for specular terms
pub const VIEW_POSITION: &str = "viewPosition";
/// Lighting toggle
pub const USE_LIGHTING: &str = "bUseLighting";
/// Texture sampling toggle
pub const USE_TEXTURE: &str = "bUseTexture";
/// Solid color when texturing is off, tint when it is on
pub const OBJECT_COLOR: &str = "objectColor";
/// Sampler selecting the surface texture unit
pub const OBJECT_TEXTURE: &str = "objectTexture";
/// UV tiling multiplier
pub const UV_SCALE: &str = "UVscale";

/// Ambient strength, already divided by the light count
pub const AMBIENT_STRENGTH: &str = "material.ambientStrength";
/// Material ambient color
pub const AMBIENT_COLOR: &str = "material.ambientColor";
/// Material diffuse color
pub const DIFFUSE_COLOR: &str = "material.diffuseColor";
/// Material specular color
pub const SPECULAR_COLOR: &str = "material.specularColor";
/// Material specular exponent
pub const SHININESS: &str = "material.shininess";
