//! # Free-look Camera
//!
//! Position plus a yaw/pitch orientation. The front vector is always derived
//! from yaw and pitch, so the two can never disagree.
//!
//! # Coordinate System
//! Right-handed, Y-up. Yaw is measured from +X toward +Z, so a yaw of -90°
//! looks down -Z.

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// Pitch stays strictly inside ±90° so the view never flips over the pole
pub const PITCH_LIMIT: f32 = 89.0;

/// Perspective camera state
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// World-space eye position
    pub position: Vec3,
    /// Unit view direction
    pub front: Vec3,
    /// World up
    pub up: Vec3,
    /// Heading in degrees
    pub yaw: f32,
    /// Elevation in degrees
    pub pitch: f32,
    /// Vertical field of view in degrees
    pub zoom: f32,
}

impl Default for CameraState {
    /// Slightly raised, pulled back, looking down at the table
    fn default() -> Self {
        Self::looking_along(Vec3::new(0.0, 5.0, 12.0), Vec3::new(0.0, -0.5, -2.0), 80.0)
    }
}

impl CameraState {
    /// Camera at `position` looking along `direction`
    ///
    /// Yaw and pitch are derived from the direction so the first pointer
    /// motion continues smoothly from it.
    pub fn looking_along(position: Vec3, direction: Vec3, zoom: f32) -> Self {
        let front = direction.normalize();
        // Yaw is atan2(z, x) with no extra -90° offset. With the offset the
        // first pointer sample would snap the view a quarter turn away.
        let mut camera = Self {
            position,
            front,
            up: Vec3::y(),
            yaw: utils::rad_to_deg(front.z.atan2(front.x)),
            pitch: utils::rad_to_deg(front.y.asin()).clamp(-PITCH_LIMIT, PITCH_LIMIT),
            zoom,
        };
        camera.update_front();
        camera
    }

    /// Turn by yaw/pitch offsets in degrees, clamping pitch
    pub fn rotate(&mut self, yaw_offset: f32, pitch_offset: f32) {
        self.yaw += yaw_offset;
        self.pitch = (self.pitch + pitch_offset).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_front();
    }

    fn update_front(&mut self) {
        let (yaw, pitch) = (utils::deg_to_rad(self.yaw), utils::deg_to_rad(self.pitch));
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
    }

    /// Unit vector to the camera's right
    pub fn right(&self) -> Vec3 {
        self.front.cross(&self.up).normalize()
    }

    /// Right-handed view matrix looking along `front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.front, self.up)
    }
}
