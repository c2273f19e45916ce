//! Recording backend
//!
//! Implements every GPU collaborator trait by appending to an ordered event
//! log instead of touching a graphics API. Clones share the same log, so one
//! handle can be given to the scene composer as its mesh and texture backend
//! while another serves as the uniform sink, and the log still shows the
//! exact interleaving of uniform writes and draws.
//!
//! The headless runner dumps this log; tests assert against it.

use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use crate::render::backend::{
    GpuTexture, MeshProvider, PixelFormat, Primitive, TextureBackend, TextureUpload, UniformSink,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// A recorded uniform value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UniformValue {
    /// `mat4`
    Mat4(Mat4),
    /// `vec2`
    Vec2([f32; 2]),
    /// `vec3`
    Vec3([f32; 3]),
    /// `vec4`
    Vec4([f32; 4]),
    /// `float`
    Float(f32),
    /// `int` / `bool`
    Int(i32),
    /// `sampler2D` unit
    Sampler(u32),
}

/// One recorded backend call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrameEvent {
    /// Uniform write
    Uniform {
        /// Uniform name
        name: String,
        /// Written value
        value: UniformValue,
    },
    /// Mesh build
    LoadMesh(Primitive),
    /// Draw call
    Draw(Primitive),
    /// Texture creation
    CreateTexture {
        /// Assigned name
        texture: GpuTexture,
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
        /// Uploaded layout
        format: PixelFormat,
    },
    /// Texture bound to a unit
    BindUnit {
        /// Texture unit
        unit: u32,
        /// Bound texture
        texture: GpuTexture,
    },
    /// Texture deletion
    DeleteTexture(GpuTexture),
}

#[derive(Debug, Default)]
struct Recording {
    events: Vec<FrameEvent>,
    live_textures: HashSet<GpuTexture>,
    next_texture: u32,
    reject_uploads: bool,
}

/// Shared-log implementation of [`UniformSink`], [`MeshProvider`] and [`TextureBackend`]
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    inner: Rc<RefCell<Recording>>,
}

impl RecordingBackend {
    /// Create an empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent texture creations fail, simulating a driver error
    pub fn reject_uploads(&self, reject: bool) {
        self.inner.borrow_mut().reject_uploads = reject;
    }

    /// Every event recorded so far
    pub fn events(&self) -> Vec<FrameEvent> {
        self.inner.borrow().events.clone()
    }

    /// Drain the event log, keeping texture bookkeeping intact
    pub fn take_events(&self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.inner.borrow_mut().events)
    }

    /// Uniform writes in order
    pub fn uniform_writes(&self) -> Vec<(String, UniformValue)> {
        self.inner
            .borrow()
            .events
            .iter()
            .filter_map(|event| match event {
                FrameEvent::Uniform { name, value } => Some((name.clone(), value.clone())),
                _ => None,
            })
            .collect()
    }

    /// Most recent value written to a uniform
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.inner
            .borrow()
            .events
            .iter()
            .rev()
            .find_map(|event| match event {
                FrameEvent::Uniform { name: written, value } if written == name => {
                    Some(value.clone())
                }
                _ => None,
            })
    }

    /// Draw calls in order
    pub fn draws(&self) -> Vec<Primitive> {
        self.inner
            .borrow()
            .events
            .iter()
            .filter_map(|event| match event {
                FrameEvent::Draw(primitive) => Some(*primitive),
                _ => None,
            })
            .collect()
    }

    /// Number of textures created and not yet deleted
    pub fn live_texture_count(&self) -> usize {
        self.inner.borrow().live_textures.len()
    }

    /// Every texture deletion in order
    pub fn deleted_textures(&self) -> Vec<GpuTexture> {
        self.inner
            .borrow()
            .events
            .iter()
            .filter_map(|event| match event {
                FrameEvent::DeleteTexture(texture) => Some(*texture),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: FrameEvent) {
        self.inner.borrow_mut().events.push(event);
    }

    fn push_uniform(&self, name: &str, value: UniformValue) {
        self.push(FrameEvent::Uniform {
            name: name.to_string(),
            value,
        });
    }
}

impl UniformSink for RecordingBackend {
    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.push_uniform(name, UniformValue::Mat4(*value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.push_uniform(name, UniformValue::Vec2(value.into()));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.push_uniform(name, UniformValue::Vec3(value.into()));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.push_uniform(name, UniformValue::Vec4(value.into()));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.push_uniform(name, UniformValue::Float(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.push_uniform(name, UniformValue::Int(value));
    }

    fn set_sampler(&mut self, name: &str, unit: u32) {
        self.push_uniform(name, UniformValue::Sampler(unit));
    }
}

impl MeshProvider for RecordingBackend {
    fn load(&mut self, primitive: Primitive) {
        self.push(FrameEvent::LoadMesh(primitive));
    }

    fn draw(&mut self, primitive: Primitive) {
        self.push(FrameEvent::Draw(primitive));
    }
}

impl TextureBackend for RecordingBackend {
    fn create_texture(&mut self, upload: &TextureUpload<'_>) -> Result<GpuTexture, String> {
        let mut inner = self.inner.borrow_mut();
        if inner.reject_uploads {
            return Err("texture upload rejected".to_string());
        }

        let expected = upload.width as usize * upload.height as usize * upload.format.bytes_per_pixel();
        if upload.pixels.len() != expected {
            return Err(format!(
                "pixel buffer is {} bytes, expected {}",
                upload.pixels.len(),
                expected
            ));
        }

        // GL reserves 0 for "no texture"
        inner.next_texture += 1;
        let texture = GpuTexture(inner.next_texture);
        inner.live_textures.insert(texture);
        inner.events.push(FrameEvent::CreateTexture {
            texture,
            width: upload.width,
            height: upload.height,
            format: upload.format,
        });
        Ok(texture)
    }

    fn bind_unit(&mut self, unit: u32, texture: GpuTexture) {
        self.push(FrameEvent::BindUnit { unit, texture });
    }

    fn delete_texture(&mut self, texture: GpuTexture) {
        let mut inner = self.inner.borrow_mut();
        if !inner.live_textures.remove(&texture) {
            log::warn!("Deleting texture {texture:?} that is not live");
        }
        inner.events.push(FrameEvent::DeleteTexture(texture));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::backend::SamplerParams;

    #[test]
    fn test_clones_share_one_log() {
        let backend = RecordingBackend::new();
        let mut sink = backend.clone();
        let mut meshes = backend.clone();

        sink.set_float("a", 1.0);
        meshes.draw(Primitive::Box);
        sink.set_int("b", 2);

        assert_eq!(
            backend.events(),
            vec![
                FrameEvent::Uniform { name: "a".into(), value: UniformValue::Float(1.0) },
                FrameEvent::Draw(Primitive::Box),
                FrameEvent::Uniform { name: "b".into(), value: UniformValue::Int(2) },
            ]
        );
    }

    #[test]
    fn test_texture_lifecycle_bookkeeping() {
        let mut backend = RecordingBackend::new();
        let pixels = [0_u8; 2 * 2 * 3];
        let upload = TextureUpload {
            pixels: &pixels,
            width: 2,
            height: 2,
            format: PixelFormat::Rgb8,
            sampler: SamplerParams::default(),
        };

        let texture = backend.create_texture(&upload).unwrap();
        assert_ne!(texture, GpuTexture(0));
        assert_eq!(backend.live_texture_count(), 1);

        backend.delete_texture(texture);
        assert_eq!(backend.live_texture_count(), 0);
        assert_eq!(backend.deleted_textures(), vec![texture]);
    }

    #[test]
    fn test_short_pixel_buffer_is_rejected() {
        let mut backend = RecordingBackend::new();
        let pixels = [0_u8; 5];
        let upload = TextureUpload {
            pixels: &pixels,
            width: 2,
            height: 2,
            format: PixelFormat::Rgba8,
            sampler: SamplerParams::default(),
        };

        assert!(backend.create_texture(&upload).is_err());
        assert_eq!(backend.live_texture_count(), 0);
    }
}
