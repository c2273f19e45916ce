//! # Rendering Layer
//!
//! Everything between the scene description and the GPU:
//!
//! - **backend**: collaborator traits for uniforms, meshes and textures
//! - **uniforms**: the uniform names the shader program declares
//! - **lighting**: the fixed four-slot light rig
//! - **material**: material presets and the ambient compensation
//! - **texture_store**: fixed-capacity tagged textures bound to units
//! - **recording**: an in-memory backend used headless and in tests

pub mod backend;
pub mod uniforms;
pub mod lighting;
pub mod material;
pub mod texture_store;
pub mod recording;

pub use backend::{
    FilterMode, GpuTexture, MeshProvider, PixelFormat, Primitive, SamplerParams, TextureBackend,
    TextureUpload, UniformSink, WrapMode,
};
pub use lighting::{apply_lights, light_uniform, scene_lights, LightSource, LIGHT_COUNT};
pub use material::{
    apply_material, apply_material_tag, apply_solid_color, uploaded_ambient, Material,
    MaterialPreset, UnknownMaterial, FALLBACK_COLOR,
};
pub use recording::{FrameEvent, RecordingBackend, UniformValue};
pub use texture_store::{TextureEntry, TextureError, TextureStore, MAX_TEXTURES};
