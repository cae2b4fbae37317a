use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Spatial transform: position, Euler rotation (XYZ order, radians), scale.
///
/// Rotation is stored as Euler angles rather than a quaternion because the
/// demo accumulates spin per axis every frame and tweens relative angle deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Local-to-parent matrix (translate * rotate * scale).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Vec3::ZERO);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn matrix_applies_translation_last() {
        let t = Transform {
            position: Vec3::new(2.0, -4.0, 0.0),
            rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
            scale: Vec3::ONE,
        };
        let p = t.matrix().transform_point3(Vec3::X);
        // +X rotated a quarter turn about Y lands on -Z, then gets translated.
        assert!((p - Vec3::new(2.0, -4.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn euler_order_is_xyz() {
        let t = Transform {
            rotation: Vec3::new(0.3, 0.5, 0.7),
            ..Transform::default()
        };
        let expected = Quat::from_rotation_x(0.3) * Quat::from_rotation_y(0.5) * Quat::from_rotation_z(0.7);
        assert!(t.quat().abs_diff_eq(expected, 1e-6));
    }
}
