//! # Tabletop Engine
//!
//! Scene composition, lighting uniforms and a free-look camera for a fixed
//! tabletop still life: a mug on a coaster, a can, a wood block and a steel
//! ball in front of a backdrop on a wooden floor.
//!
//! ## Features
//!
//! - **Texture Store**: up to 16 tagged textures, one per texture unit
//! - **Materials and Lights**: preset reflectance tables and a four-slot light rig
//! - **Scene Composer**: compound objects built from five unit primitives
//! - **View Controller**: perspective free-look plus a fixed orthographic view
//!
//! The GPU itself sits behind the traits in [`render::backend`]; the crate
//! never calls a graphics API. [`render::RecordingBackend`] implements them
//! for headless runs and tests.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tabletop_engine::prelude::*;
//!
//! let backend = RecordingBackend::new();
//! let mut scene = SceneComposer::new(backend.clone(), backend.clone());
//! scene.prepare("Textures");
//!
//! let mut view = ViewController::new(ViewSettings::default());
//! let mut sink = backend.clone();
//! view.update(Commands::FORWARD, 1.0 / 60.0);
//! view.prepare_view(&mut sink, 1000.0 / 800.0);
//! scene.render(&mut sink);
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod config;
pub mod core;
pub mod assets;
pub mod render;
pub mod scene;
pub mod view;

#[cfg(test)]
mod tests;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::{AppConfig, Config, ConfigError, ViewSettings, WindowConfig},
        foundation::{
            math::{Mat4, Vec2, Vec3, Vec4},
            time::Timer,
        },
        render::{
            FrameEvent, MaterialPreset, MeshProvider, Primitive, RecordingBackend, TextureBackend,
            TextureStore, UniformSink, UniformValue,
        },
        scene::{DrawOp, ModelTransform, SceneComposer},
        view::{Commands, FrameControl, ProjectionMode, ViewController, ViewFrame},
    };
}
