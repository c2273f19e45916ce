//! Texture store
//!
//! A fixed-capacity arena of tagged GPU textures. The position of an entry is
//! also the texture unit it is bound to, so resolving a tag to a slot is a
//! linear scan over at most [`MAX_TEXTURES`] entries.
//!
//! The store owns every texture it creates and deletes each exactly once,
//! either through [`TextureStore::release_all`] or on drop.

use std::path::Path;

use image::DynamicImage;
use thiserror::Error;

use crate::assets::{AssetError, ImageData};
use crate::render::backend::{GpuTexture, SamplerParams, TextureBackend, TextureUpload};

/// Hard capacity of the store; loads beyond this are rejected, never evicted
pub const MAX_TEXTURES: usize = 16;

/// Texture loading errors
#[derive(Error, Debug)]
pub enum TextureError {
    /// The store already holds [`MAX_TEXTURES`] entries
    #[error("Texture limit reached ({MAX_TEXTURES}), could not load '{0}'")]
    CapacityReached(String),

    /// Another entry already uses this tag
    #[error("Texture tag '{0}' is already loaded")]
    DuplicateTag(String),

    /// The image could not be decoded or has an unsupported layout
    #[error(transparent)]
    Image(#[from] AssetError),

    /// The GPU backend refused the upload
    #[error("Texture upload failed: {0}")]
    Backend(String),
}

/// One loaded texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureEntry {
    /// Lookup tag
    pub tag: String,
    /// GPU name
    pub texture: GpuTexture,
}

/// Tagged GPU textures, one per texture unit
pub struct TextureStore<B: TextureBackend> {
    backend: B,
    entries: Vec<TextureEntry>,
    sampler: SamplerParams,
}

impl<B: TextureBackend> TextureStore<B> {
    /// Create an empty store on top of a backend
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            entries: Vec::with_capacity(MAX_TEXTURES),
            sampler: SamplerParams::default(),
        }
    }

    /// Load an image file and register it under `tag`
    ///
    /// Returns the texture unit the entry occupies. On failure the store is
    /// left unchanged and the reason is logged.
    pub fn load(&mut self, path: impl AsRef<Path>, tag: &str) -> Result<u32, TextureError> {
        let path = path.as_ref();
        let result = self
            .check_room(tag)
            .and_then(|()| ImageData::from_file(path).map_err(TextureError::from))
            .and_then(|image| self.upload(&image, tag));

        if let Err(err) = &result {
            log::warn!("Could not load texture '{}' from {:?}: {}", tag, path, err);
        }
        result
    }

    /// Register an already decoded image under `tag`
    pub fn load_image(&mut self, image: DynamicImage, tag: &str) -> Result<u32, TextureError> {
        let result = self
            .check_room(tag)
            .and_then(|()| ImageData::from_dynamic(image).map_err(TextureError::from))
            .and_then(|image| self.upload(&image, tag));

        if let Err(err) = &result {
            log::warn!("Could not load texture '{}': {}", tag, err);
        }
        result
    }

    fn check_room(&self, tag: &str) -> Result<(), TextureError> {
        if self.entries.len() >= MAX_TEXTURES {
            return Err(TextureError::CapacityReached(tag.to_string()));
        }
        if self.entries.iter().any(|entry| entry.tag == tag) {
            return Err(TextureError::DuplicateTag(tag.to_string()));
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn upload(&mut self, image: &ImageData, tag: &str) -> Result<u32, TextureError> {
        let upload = TextureUpload {
            pixels: &image.data,
            width: image.width,
            height: image.height,
            format: image.format,
            sampler: self.sampler,
        };
        let texture = self
            .backend
            .create_texture(&upload)
            .map_err(TextureError::Backend)?;

        let unit = self.entries.len() as u32;
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            texture,
        });
        log::debug!("Texture '{}' -> unit {} ({:?})", tag, unit, texture);
        Ok(unit)
    }

    /// Texture unit of a tag, or `None` if it was never loaded
    #[allow(clippy::cast_possible_truncation)]
    pub fn resolve_slot(&self, tag: &str) -> Option<u32> {
        self.entries
            .iter()
            .position(|entry| entry.tag == tag)
            .map(|index| index as u32)
    }

    /// GPU name of a tag, or `None` if it was never loaded
    pub fn texture(&self, tag: &str) -> Option<GpuTexture> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.texture)
    }

    /// Bind every entry to the texture unit matching its slot
    #[allow(clippy::cast_possible_truncation)]
    pub fn bind_all(&mut self) {
        for (unit, entry) in self.entries.iter().enumerate() {
            self.backend.bind_unit(unit as u32, entry.texture);
        }
    }

    /// Delete every texture and empty the store
    ///
    /// Safe to call repeatedly and on a store that never loaded anything.
    pub fn release_all(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        let count = self.entries.len();
        for entry in self.entries.drain(..) {
            self.backend.delete_texture(entry.texture);
        }
        log::info!("Released {} textures", count);
    }

    /// Number of loaded textures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no texture is loaded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loaded tags in slot order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.tag.as_str())
    }

    /// The underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: TextureBackend> Drop for TextureStore<B> {
    fn drop(&mut self) {
        self.release_all();
    }
}
