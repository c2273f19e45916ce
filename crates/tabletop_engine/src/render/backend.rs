//! Collaborator contracts for the GPU side
//!
//! The scene and view layers never talk to a graphics API directly. They go
//! through three seams:
//!
//! - [`UniformSink`]: named, typed uniform writes into the active shader program
//! - [`MeshProvider`]: one-time mesh builds and draw calls per [`Primitive`]
//! - [`TextureBackend`]: creation, unit binding and deletion of 2D textures
//!
//! Shader compilation, vertex generation and context creation live behind
//! these traits. [`crate::render::recording::RecordingBackend`] implements all
//! three for headless runs and tests.

use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Typed uniform setters addressed by name
///
/// Array elements use the GLSL spelling, e.g. `lightSources[1].diffuseColor`.
pub trait UniformSink {
    /// Set a `mat4` uniform
    fn set_mat4(&mut self, name: &str, value: &Mat4);
    /// Set a `vec2` uniform
    fn set_vec2(&mut self, name: &str, value: Vec2);
    /// Set a `vec3` uniform
    fn set_vec3(&mut self, name: &str, value: Vec3);
    /// Set a `vec4` uniform
    fn set_vec4(&mut self, name: &str, value: Vec4);
    /// Set a `float` uniform
    fn set_float(&mut self, name: &str, value: f32);
    /// Set an `int` uniform
    fn set_int(&mut self, name: &str, value: i32);
    /// Set a `bool` uniform (uploaded as an int)
    fn set_bool(&mut self, name: &str, value: bool) {
        self.set_int(name, i32::from(value));
    }
    /// Point a `sampler2D` uniform at a texture unit
    fn set_sampler(&mut self, name: &str, unit: u32);
}

/// Unit-sized primitive shapes the scene is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    /// 1x1 plane in XZ
    Plane,
    /// Unit cube
    Box,
    /// Unit cylinder standing on Y
    Cylinder,
    /// Unit sphere
    Sphere,
    /// Torus in the XY plane
    Torus,
}

impl Primitive {
    /// Every primitive kind, in load order
    pub const ALL: [Self; 5] = [
        Self::Plane,
        Self::Cylinder,
        Self::Torus,
        Self::Box,
        Self::Sphere,
    ];
}

/// Builds and draws primitive meshes
pub trait MeshProvider {
    /// Build the GPU mesh for a primitive (called once per kind)
    fn load(&mut self, primitive: Primitive);
    /// Draw a primitive with whatever uniform/texture state is currently bound
    fn draw(&mut self, primitive: Primitive);
}

/// Opaque GPU texture name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GpuTexture(pub u32);

/// Texture filtering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    /// Linear filtering
    Linear,
    /// Trilinear: linear within and between mip levels
    LinearMipmapLinear,
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Repeat the texture
    Repeat,
    /// Clamp to edge
    ClampToEdge,
}

/// Sampler state applied when a texture is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerParams {
    /// Minification filter
    pub min_filter: FilterMode,
    /// Magnification filter
    pub mag_filter: FilterMode,
    /// Wrap mode on S
    pub wrap_s: WrapMode,
    /// Wrap mode on T
    pub wrap_t: WrapMode,
    /// Build the mip chain after upload
    pub generate_mipmaps: bool,
}

impl Default for SamplerParams {
    /// Tiled surfaces: repeat wrap, trilinear minification, mipmapped
    fn default() -> Self {
        Self {
            min_filter: FilterMode::LinearMipmapLinear,
            mag_filter: FilterMode::Linear,
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            generate_mipmaps: true,
        }
    }
}

/// Pixel layouts accepted for upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 8-bit RGB
    Rgb8,
    /// 8-bit RGBA
    Rgba8,
}

impl PixelFormat {
    /// Map a source channel count to a pixel format
    pub fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(Self::Rgb8),
            4 => Some(Self::Rgba8),
            _ => None,
        }
    }

    /// Bytes per pixel
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

/// Decoded pixels ready for upload, row 0 at the bottom of the image
#[derive(Debug, Clone)]
pub struct TextureUpload<'a> {
    /// Tightly packed pixel rows
    pub pixels: &'a [u8],
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel layout of `pixels`
    pub format: PixelFormat,
    /// Sampler state
    pub sampler: SamplerParams,
}

/// Creates, binds and deletes GPU textures
pub trait TextureBackend {
    /// Create a 2D texture from decoded pixels
    ///
    /// On error no GPU resource may be left allocated.
    fn create_texture(&mut self, upload: &TextureUpload<'_>) -> Result<GpuTexture, String>;
    /// Bind a texture to a texture unit
    fn bind_unit(&mut self, unit: u32, texture: GpuTexture);
    /// Delete a texture
    fn delete_texture(&mut self, texture: GpuTexture);
}
