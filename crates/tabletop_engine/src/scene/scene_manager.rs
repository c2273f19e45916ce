//! # Scene Composer
//!
//! Owns the mesh provider and the texture store, prepares GPU resources once,
//! then replays the composed draw list every frame. Per object the uniform
//! writes always go model matrix, surface texture, UV scale, material, and
//! only then the draw call, so every draw sees a complete surface state.

use std::path::Path;

use crate::foundation::math::Vec4;
use crate::render::{
    apply_lights, apply_material, apply_solid_color, scene_lights, uniforms, LightSource,
    MeshProvider, Primitive, TextureBackend, TextureStore, UniformSink, FALLBACK_COLOR,
    LIGHT_COUNT,
};
use crate::scene::layout::SCENE_TEXTURES;
use crate::scene::objects::{compose_scene, DrawOp};

/// Per-frame counters from the last [`SceneComposer::render`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Draw calls issued
    pub draw_calls: usize,
    /// Draws that fell back to the flat gray surface
    pub fallback_surfaces: usize,
}

/// High-level coordinator for the still-life scene
pub struct SceneComposer<M: MeshProvider, B: TextureBackend> {
    meshes: M,
    textures: TextureStore<B>,
    lights: [LightSource; LIGHT_COUNT],
    draw_ops: Vec<DrawOp>,
    prepared: bool,
    stats: RenderStats,
}

impl<M: MeshProvider, B: TextureBackend> SceneComposer<M, B> {
    /// Create a composer with the default scene and light rig
    pub fn new(meshes: M, texture_backend: B) -> Self {
        Self {
            meshes,
            textures: TextureStore::new(texture_backend),
            lights: scene_lights(),
            draw_ops: compose_scene(),
            prepared: false,
            stats: RenderStats::default(),
        }
    }

    /// Build meshes and load textures from `texture_dir`
    ///
    /// Missing or undecodable textures are logged and skipped; surfaces
    /// that use them render in flat gray. Calling this again is a no-op.
    pub fn prepare(&mut self, texture_dir: impl AsRef<Path>) {
        if self.prepared {
            log::debug!("Scene already prepared, skipping");
            return;
        }

        for primitive in Primitive::ALL {
            self.meshes.load(primitive);
        }

        let texture_dir = texture_dir.as_ref();
        let mut loaded = 0;
        for asset in &SCENE_TEXTURES {
            if self.textures.load(texture_dir.join(asset.file), asset.tag).is_ok() {
                loaded += 1;
            }
        }
        self.textures.bind_all();
        self.prepared = true;

        log::info!(
            "Scene prepared: {} meshes, {}/{} textures from {:?}",
            Primitive::ALL.len(),
            loaded,
            SCENE_TEXTURES.len(),
            texture_dir
        );
    }

    /// Upload lighting and draw every object
    pub fn render(&mut self, sink: &mut dyn UniformSink) {
        if !self.prepared {
            log::warn!("Render called before prepare; nothing drawn");
            return;
        }

        let mut stats = RenderStats::default();

        sink.set_bool(uniforms::USE_LIGHTING, true);
        apply_lights(sink, &self.lights);

        for op in &self.draw_ops {
            sink.set_mat4(uniforms::MODEL, &op.transform.to_matrix());
            if !self.set_surface_texture(sink, op.texture) {
                stats.fallback_surfaces += 1;
            }
            sink.set_vec2(uniforms::UV_SCALE, op.uv_scale);
            apply_material(sink, op.material);
            self.meshes.draw(op.primitive);
            stats.draw_calls += 1;
        }

        self.stats = stats;
    }

    /// Select the texture for the next draw
    ///
    /// Returns `false` when the tag is not loaded and the flat gray fallback
    /// was applied instead.
    pub fn set_surface_texture(&self, sink: &mut dyn UniformSink, tag: &str) -> bool {
        match self.textures.resolve_slot(tag) {
            Some(slot) => {
                sink.set_bool(uniforms::USE_TEXTURE, true);
                sink.set_vec4(uniforms::OBJECT_COLOR, Vec4::repeat(1.0));
                sink.set_sampler(uniforms::OBJECT_TEXTURE, slot);
                true
            }
            None => {
                log::warn!("Texture '{}' not loaded; using fallback color", tag);
                apply_solid_color(sink, Vec4::from(FALLBACK_COLOR));
                false
            }
        }
    }

    /// Delete every GPU texture
    ///
    /// The composer must be prepared again before it can render.
    pub fn release(&mut self) {
        self.textures.release_all();
        self.prepared = false;
    }

    /// Whether [`Self::prepare`] has run since creation or the last release
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// The texture store
    pub fn textures(&self) -> &TextureStore<B> {
        &self.textures
    }

    /// The composed draw list
    pub fn draw_ops(&self) -> &[DrawOp] {
        &self.draw_ops
    }

    /// Counters from the last rendered frame
    pub fn stats(&self) -> RenderStats {
        self.stats
    }
}
