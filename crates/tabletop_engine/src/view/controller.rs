//! # View Controller
//!
//! Turns per-frame input into the `view`, `projection` and `viewPosition`
//! uniforms. Two projection modes:
//!
//! - **Perspective**: free-look camera driven by pointer, keys and scroll
//! - **Orthographic**: a fixed framing of the mug, independent of wherever
//!   the perspective camera has wandered
//!
//! Mode switches are edge-triggered; holding a key switches once.

use crate::core::ViewSettings;
use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};
use crate::render::{uniforms, UniformSink};
use crate::view::camera::CameraState;
use crate::view::input::{Commands, InputSession};

/// Near clip distance for both modes
pub const NEAR_PLANE: f32 = 0.1;
/// Far clip distance for both modes
pub const FAR_PLANE: f32 = 100.0;
/// Fixed eye of the orthographic view
pub const ORTHO_EYE: Vec3 = Vec3::new(-2.0, 0.95, 8.0);
/// Fixed target of the orthographic view
pub const ORTHO_TARGET: Vec3 = Vec3::new(-2.0, 0.95, -1.0);
/// Half the visible height of the orthographic view
pub const ORTHO_HALF_HEIGHT: f32 = 0.85;

/// Active projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Free-look perspective camera
    #[default]
    Perspective,
    /// Fixed orthographic framing
    Orthographic,
}

/// What the host should do after a frame's input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Keep running
    Continue,
    /// The user asked to close the window
    CloseRequested,
}

/// Matrices and eye position for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ViewFrame {
    /// View matrix
    pub view: Mat4,
    /// Projection matrix
    pub projection: Mat4,
    /// Eye position used for specular terms
    pub eye: Vec3,
}

/// Camera, projection mode and input session for one window
#[derive(Debug, Clone)]
pub struct ViewController {
    settings: ViewSettings,
    camera: CameraState,
    session: InputSession,
    mode: ProjectionMode,
}

impl ViewController {
    /// Default camera in perspective mode
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            settings,
            camera: CameraState::default(),
            session: InputSession::new(),
            mode: ProjectionMode::default(),
        }
    }

    /// Pointer moved to `(x, y)` in window coordinates
    ///
    /// The position is always tracked; the camera only turns in perspective.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let Some((dx, dy)) = self.session.pointer_delta(x, y) else {
            return;
        };
        if self.mode != ProjectionMode::Perspective {
            return;
        }

        let sensitivity = self.settings.mouse_sensitivity;
        self.camera.rotate(dx * sensitivity, dy * sensitivity);
    }

    /// Scroll wheel moved by `dy` notches
    pub fn on_scroll(&mut self, dy: f64) {
        self.session.scroll(dy, &self.settings);
        log::trace!("Speed scale {:.2}", self.session.speed_scale());
    }

    /// Apply the commands held this frame
    pub fn update(&mut self, held: Commands, dt: f32) -> FrameControl {
        let control = if held.contains(Commands::QUIT) {
            FrameControl::CloseRequested
        } else {
            FrameControl::Continue
        };

        if self.session.orthographic.rising(held.contains(Commands::ORTHOGRAPHIC)) {
            self.set_mode(ProjectionMode::Orthographic);
        }
        if self.session.perspective.rising(held.contains(Commands::PERSPECTIVE)) {
            self.set_mode(ProjectionMode::Perspective);
        }

        if self.mode == ProjectionMode::Perspective {
            self.apply_movement(held, dt);
        }

        control
    }

    fn set_mode(&mut self, mode: ProjectionMode) {
        if self.mode != mode {
            log::info!("Projection mode: {:?}", mode);
            self.mode = mode;
        }
    }

    fn apply_movement(&mut self, held: Commands, dt: f32) {
        let velocity = self.settings.base_move_speed * self.session.speed_scale() * dt;
        let front = self.camera.front;
        let right = self.camera.right();
        let up = self.camera.up;

        let mut offset = Vec3::zeros();
        for (command, direction) in [
            (Commands::FORWARD, front),
            (Commands::BACKWARD, -front),
            (Commands::LEFT, -right),
            (Commands::RIGHT, right),
            (Commands::UP, up),
            (Commands::DOWN, -up),
        ] {
            if held.contains(command) {
                offset += direction * velocity;
            }
        }
        self.camera.position += offset;
    }

    /// Matrices for the current mode at the given aspect ratio
    pub fn view_frame(&self, aspect: f32) -> ViewFrame {
        match self.mode {
            ProjectionMode::Perspective => ViewFrame {
                view: self.camera.view_matrix(),
                projection: Mat4::perspective(
                    utils::deg_to_rad(self.camera.zoom),
                    aspect,
                    NEAR_PLANE,
                    FAR_PLANE,
                ),
                eye: self.camera.position,
            },
            ProjectionMode::Orthographic => {
                let half_width = ORTHO_HALF_HEIGHT * aspect;
                ViewFrame {
                    view: Mat4::look_at(ORTHO_EYE, ORTHO_TARGET, Vec3::y()),
                    projection: Mat4::orthographic(
                        -half_width,
                        half_width,
                        -ORTHO_HALF_HEIGHT,
                        ORTHO_HALF_HEIGHT,
                        NEAR_PLANE,
                        FAR_PLANE,
                    ),
                    eye: ORTHO_EYE,
                }
            }
        }
    }

    /// Upload `view`, `projection` and `viewPosition` for this frame
    pub fn prepare_view(&self, sink: &mut dyn UniformSink, aspect: f32) -> ViewFrame {
        let frame = self.view_frame(aspect);
        sink.set_mat4(uniforms::VIEW, &frame.view);
        sink.set_mat4(uniforms::PROJECTION, &frame.projection);
        sink.set_vec3(uniforms::VIEW_POSITION, frame.eye);
        frame
    }

    /// Active projection mode
    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    /// Perspective camera state
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Input session state
    pub fn session(&self) -> &InputSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RecordingBackend, UniformValue};
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;
    const DT: f32 = 1.0 / 60.0;

    fn controller() -> ViewController {
        ViewController::new(ViewSettings::default())
    }

    #[test]
    fn test_starts_in_perspective() {
        let view = controller();
        assert_eq!(view.mode(), ProjectionMode::Perspective);
        assert_eq!(view.camera(), &CameraState::default());
    }

    #[test]
    fn test_holding_o_switches_once() {
        let mut view = controller();
        for _ in 0..5 {
            assert_eq!(view.update(Commands::ORTHOGRAPHIC, DT), FrameControl::Continue);
            assert_eq!(view.mode(), ProjectionMode::Orthographic);
        }

        view.update(Commands::PERSPECTIVE, DT);
        assert_eq!(view.mode(), ProjectionMode::Perspective);

        // Still held from before: no new edge
        view.update(Commands::PERSPECTIVE | Commands::ORTHOGRAPHIC, DT);
        assert_eq!(view.mode(), ProjectionMode::Orthographic);
    }

    #[test]
    fn test_quit_requests_close() {
        let mut view = controller();
        assert_eq!(view.update(Commands::QUIT, DT), FrameControl::CloseRequested);
        assert_eq!(view.update(Commands::empty(), DT), FrameControl::Continue);
    }

    #[test]
    fn test_forward_moves_along_front_scaled_by_speed() {
        let mut view = controller();
        let start = view.camera().position;
        let front = view.camera().front;

        view.update(Commands::FORWARD, 0.5);
        assert_relative_eq!(view.camera().position, start + front * 3.0, epsilon = EPSILON);

        view.on_scroll(10.0);
        let before = view.camera().position;
        view.update(Commands::BACKWARD, 0.5);
        assert_relative_eq!(view.camera().position, before - front * 6.0, epsilon = 1e-4);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut view = controller();
        let start = view.camera().position;
        view.update(Commands::LEFT | Commands::RIGHT | Commands::UP | Commands::DOWN, 1.0);
        assert_relative_eq!(view.camera().position, start, epsilon = EPSILON);
    }

    #[test]
    fn test_pointer_turns_camera_after_priming() {
        let mut view = controller();
        let yaw = view.camera().yaw;

        view.on_cursor_moved(500.0, 400.0);
        assert_relative_eq!(view.camera().yaw, yaw);

        view.on_cursor_moved(600.0, 400.0);
        assert_relative_eq!(view.camera().yaw, yaw + 10.0, epsilon = 1e-4);

        // Pushing far upward pins pitch at the limit
        view.on_cursor_moved(600.0, -100_000.0);
        assert_relative_eq!(view.camera().pitch, 89.0);
    }

    #[test]
    fn test_orthographic_ignores_movement_and_look() {
        let mut view = controller();
        view.update(Commands::ORTHOGRAPHIC, DT);
        let camera = view.camera().clone();

        view.on_cursor_moved(0.0, 0.0);
        view.on_cursor_moved(300.0, 300.0);
        view.update(Commands::FORWARD | Commands::UP, 1.0);
        assert_eq!(view.camera(), &camera);

        // The pointer was still tracked, so returning to perspective does not jump
        view.update(Commands::PERSPECTIVE, DT);
        view.on_cursor_moved(300.0, 300.0);
        assert_eq!(view.camera(), &camera);
    }

    #[test]
    fn test_orthographic_frame_is_fixed() {
        let mut wandered = controller();
        wandered.on_cursor_moved(0.0, 0.0);
        wandered.on_cursor_moved(250.0, -80.0);
        wandered.update(Commands::FORWARD | Commands::RIGHT, 2.0);
        wandered.update(Commands::ORTHOGRAPHIC, DT);

        let mut fresh = controller();
        fresh.update(Commands::ORTHOGRAPHIC, DT);

        assert_eq!(wandered.view_frame(1.25), fresh.view_frame(1.25));
        assert_relative_eq!(fresh.view_frame(1.25).eye, ORTHO_EYE);
    }

    #[test]
    fn test_prepare_view_uploads_three_uniforms() {
        let view = controller();
        let mut sink = RecordingBackend::new();
        let frame = view.prepare_view(&mut sink, 1.25);

        assert_eq!(sink.uniform_writes().len(), 3);
        assert_eq!(sink.uniform(uniforms::VIEW), Some(UniformValue::Mat4(frame.view)));
        assert_eq!(
            sink.uniform(uniforms::PROJECTION),
            Some(UniformValue::Mat4(frame.projection))
        );
        assert_eq!(
            sink.uniform(uniforms::VIEW_POSITION),
            Some(UniformValue::Vec3([0.0, 5.0, 12.0]))
        );
    }
}
