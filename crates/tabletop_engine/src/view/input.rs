//! Per-session input state
//!
//! The host samples its keyboard once per frame into [`Commands`]; pointer
//! motion and scroll arrive as events. Everything that has to persist between
//! frames (last pointer position, speed scale, previous key levels) lives in
//! [`InputSession`], owned by the controller rather than shared globally.

use bitflags::bitflags;

use crate::core::ViewSettings;

bitflags! {
    /// Logical commands held down during a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Commands: u16 {
        /// Move along the view direction (W)
        const FORWARD = 1 << 0;
        /// Move against the view direction (S)
        const BACKWARD = 1 << 1;
        /// Strafe left (A)
        const LEFT = 1 << 2;
        /// Strafe right (D)
        const RIGHT = 1 << 3;
        /// Move along the camera up vector (Q)
        const UP = 1 << 4;
        /// Move against the camera up vector (E)
        const DOWN = 1 << 5;
        /// Switch to the fixed orthographic view (O)
        const ORTHOGRAPHIC = 1 << 6;
        /// Switch back to the free perspective camera (P)
        const PERSPECTIVE = 1 << 7;
        /// Close the window (Escape)
        const QUIT = 1 << 8;
    }
}

/// Fires once per press, on the frame the level goes from up to down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeTrigger {
    previous: bool,
}

impl EdgeTrigger {
    /// Feed the current level; true only on a rising edge
    pub fn rising(&mut self, now: bool) -> bool {
        let fired = now && !self.previous;
        self.previous = now;
        fired
    }
}

/// Input state carried across frames
#[derive(Debug, Clone, PartialEq)]
pub struct InputSession {
    last_pointer: Option<(f64, f64)>,
    speed_scale: f32,
    /// Edge detector for [`Commands::ORTHOGRAPHIC`]
    pub orthographic: EdgeTrigger,
    /// Edge detector for [`Commands::PERSPECTIVE`]
    pub perspective: EdgeTrigger,
}

impl Default for InputSession {
    fn default() -> Self {
        Self {
            last_pointer: None,
            speed_scale: 1.0,
            orthographic: EdgeTrigger::default(),
            perspective: EdgeTrigger::default(),
        }
    }
}

impl InputSession {
    /// Fresh session: unprimed pointer, speed scale 1.0
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer sample and return `(dx, dy)` since the previous one
    ///
    /// The first sample only primes the session and yields `None`. `dy` is
    /// positive when the pointer moves up the screen.
    #[allow(clippy::cast_possible_truncation)]
    pub fn pointer_delta(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        let previous = self.last_pointer.replace((x, y));
        previous.map(|(last_x, last_y)| ((x - last_x) as f32, (last_y - y) as f32))
    }

    /// Whether a pointer sample has been seen
    pub fn is_primed(&self) -> bool {
        self.last_pointer.is_some()
    }

    /// Adjust the speed scale by one scroll event, clamped to the configured range
    #[allow(clippy::cast_possible_truncation)]
    pub fn scroll(&mut self, dy: f64, settings: &ViewSettings) {
        let scaled = self.speed_scale + dy as f32 * settings.scroll_step;
        self.speed_scale = scaled.clamp(settings.min_speed_scale, settings.max_speed_scale);
    }

    /// Current movement speed multiplier
    pub fn speed_scale(&self) -> f32 {
        self.speed_scale
    }
}
