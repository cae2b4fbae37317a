use crate::material::MaterialMode;
use crate::scene::Scene;
use glam::Vec3;
use serde::Serialize;

/// Serializable snapshot of the animated scene state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub elapsed: f32,
    pub material_mode: MaterialMode,
    pub material_color: String,
    pub camera_eye: Vec3,
    pub rig_offset: Vec3,
    pub particle_rotation_y: f32,
    pub sections: Vec<SectionReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub name: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub spinning: bool,
}

impl FrameReport {
    pub fn capture(scene: &Scene) -> Self {
        Self {
            frame: scene.frame(),
            elapsed: scene.elapsed(),
            material_mode: scene.material_mode(),
            material_color: scene.material_color().to_hex(),
            camera_eye: scene.rig().eye(),
            rig_offset: scene.rig().position,
            particle_rotation_y: scene.particles().transform.rotation.y,
            sections: scene
                .sections()
                .iter()
                .map(|m| SectionReport {
                    name: m.name.clone(),
                    position: m.transform.position,
                    rotation: m.transform.rotation,
                    spinning: m.is_spinning(),
                })
                .collect(),
        }
    }
}
