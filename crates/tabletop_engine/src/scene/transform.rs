//! Model transforms
//!
//! A transform is composed as `T · Rx · Ry · Rz · S`: scale first, then
//! rotation about Z, Y and X, then translation. The order is part of the
//! scene's look; any object with a rotation and a non-uniform scale renders
//! differently under another order.

use crate::foundation::math::{Mat4, Mat4Ext, Vec3};

/// Scale, Euler rotation in degrees, and translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    /// Per-axis scale
    pub scale: Vec3,
    /// Rotation about X, Y, Z in degrees
    pub rotation_degrees: Vec3,
    /// World-space translation
    pub translation: Vec3,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::repeat(1.0),
            rotation_degrees: Vec3::zeros(),
            translation: Vec3::zeros(),
        }
    }
}

impl ModelTransform {
    /// Scale then translate, no rotation
    pub fn new(scale: Vec3, translation: Vec3) -> Self {
        Self {
            scale,
            rotation_degrees: Vec3::zeros(),
            translation,
        }
    }

    /// Set the Euler rotation in degrees
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation_degrees = Vec3::new(x, y, z);
        self
    }

    /// Compose the model matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.translation)
            * Mat4::rotation_x_deg(self.rotation_degrees.x)
            * Mat4::rotation_y_deg(self.rotation_degrees.y)
            * Mat4::rotation_z_deg(self.rotation_degrees.z)
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_identity_by_default() {
        assert_relative_eq!(ModelTransform::default().to_matrix(), Mat4::identity());
    }

    #[test]
    fn test_point_matches_manual_composition() {
        let transform = ModelTransform::new(Vec3::new(2.0, 0.5, 3.0), Vec3::new(1.0, -2.0, 4.0))
            .rotated(30.0, 45.0, 60.0);
        let point = Point3::new(1.0, 2.0, -1.0);

        // Apply each stage in turn: scale, Rz, Ry, Rx, translate
        let scaled = Vec3::new(point.x * 2.0, point.y * 0.5, point.z * 3.0);
        let rz = Mat4::rotation_z_deg(60.0).transform_vector(&scaled);
        let ry = Mat4::rotation_y_deg(45.0).transform_vector(&rz);
        let rx = Mat4::rotation_x_deg(30.0).transform_vector(&ry);
        let expected = rx + Vec3::new(1.0, -2.0, 4.0);

        let actual = transform.to_matrix().transform_point(&point);
        assert_relative_eq!(actual.coords, expected, epsilon = EPSILON);
    }

    #[test]
    fn test_order_is_observable() {
        // Swapping the rotation order changes the result for a skewed scale
        let transform = ModelTransform::new(Vec3::new(3.0, 1.0, 1.0), Vec3::zeros())
            .rotated(90.0, 90.0, 0.0);
        let point = Point3::new(1.0, 0.0, 0.0);

        let reversed = Mat4::rotation_y_deg(90.0)
            * Mat4::rotation_x_deg(90.0)
            * Mat4::new_nonuniform_scaling(&transform.scale);

        let ours = transform.to_matrix().transform_point(&point);
        let theirs = reversed.transform_point(&point);
        assert!((ours.coords - theirs.coords).norm() > 1.0);
        assert_relative_eq!(ours.coords, Vec3::new(0.0, 3.0, 0.0), epsilon = EPSILON);
    }
}
