//! # View
//!
//! Camera state, per-session input and the controller that turns them into
//! view and projection uniforms.

pub mod camera;
pub mod input;
pub mod controller;

pub use camera::{CameraState, PITCH_LIMIT};
pub use controller::{FrameControl, ProjectionMode, ViewController, ViewFrame};
pub use input::{Commands, EdgeTrigger, InputSession};
