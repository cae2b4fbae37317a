use crate::config::CameraConfig;
use glam::{Mat4, Vec2, Vec3};

/// Perspective camera looking down -Z from its local position inside the rig.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Position relative to the rig.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), 16.0 / 9.0)
    }
}

impl PerspectiveCamera {
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, config.distance),
            fov_degrees: config.fov_degrees,
            aspect,
            near: config.near,
            far: config.far,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect.max(f32::EPSILON),
            self.near,
            self.far,
        )
    }
}

/// Group node carrying the camera. Pointer parallax moves the rig; scroll
/// moves the camera inside it, so the two offsets never fight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CameraRig {
    pub position: Vec3,
    pub camera: PerspectiveCamera,
}

impl CameraRig {
    pub fn new(camera: PerspectiveCamera) -> Self {
        Self {
            position: Vec3::ZERO,
            camera,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.aspect = aspect;
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        self.position + self.camera.position
    }

    /// The point one unit in front of the camera.
    pub fn target(&self) -> Vec3 {
        self.eye() + Vec3::NEG_Z
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye(), Vec3::NEG_Z, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.camera.projection_matrix() * self.view_matrix()
    }

    /// Ease the rig's XY offset toward `target`: each frame covers
    /// `damping * dt` of the remaining distance, capped at all of it.
    pub fn follow(&mut self, target: Vec2, damping: f32, dt: f32) {
        let factor = (damping * dt).clamp(0.0, 1.0);
        self.position.x += (target.x - self.position.x) * factor;
        self.position.y += (target.y - self.position.y) * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera() {
        let rig = CameraRig::default();
        assert_eq!(rig.eye(), Vec3::new(0.0, 0.0, 6.0));
        let vp = rig.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let rig = CameraRig::default();
        let clip = rig.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn follow_converges_without_overshoot() {
        let mut rig = CameraRig::default();
        let target = Vec2::new(0.25, -0.2);
        let mut last_gap = f32::MAX;
        for _ in 0..300 {
            rig.follow(target, 5.0, 1.0 / 60.0);
            let gap = (Vec2::new(rig.position.x, rig.position.y) - target).length();
            assert!(gap <= last_gap);
            last_gap = gap;
        }
        assert!(last_gap < 1e-4);
        assert_eq!(rig.position.z, 0.0);
    }

    #[test]
    fn follow_caps_large_steps() {
        let mut rig = CameraRig::default();
        rig.follow(Vec2::new(1.0, 1.0), 5.0, 2.0);
        assert_eq!(rig.position, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn rig_offset_moves_eye() {
        let mut rig = CameraRig::default();
        rig.position = Vec3::new(0.5, -0.5, 0.0);
        rig.camera.position.y = -4.0;
        assert_eq!(rig.eye(), Vec3::new(0.5, -4.5, 6.0));
        assert_eq!(rig.target(), Vec3::new(0.5, -4.5, 5.0));
    }
}
