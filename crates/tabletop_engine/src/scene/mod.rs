//! # Scene
//!
//! The still-life arrangement: model transforms, the constant layout table,
//! pure object builders, and the composer that replays them every frame.

pub mod transform;
pub mod layout;
pub mod objects;
pub mod scene_manager;

pub use layout::{tags, TextureAsset, SCENE_TEXTURES};
pub use objects::{compose_scene, DrawOp};
pub use scene_manager::{RenderStats, SceneComposer};
pub use transform::ModelTransform;
