use glam::Vec3;
use scrollfolio_scene::Scene;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 6.0),
            target: Vec3::new(0.0, 0.0, 5.0),
            fov_degrees: 35.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl RenderView {
    /// View through the scene's rigged camera.
    pub fn from_scene(scene: &Scene) -> Self {
        let rig = scene.rig();
        Self {
            eye: rig.eye(),
            target: rig.target(),
            fov_degrees: rig.camera.fov_degrees,
            aspect: rig.camera.aspect,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads scene state and a view configuration, then produces
/// output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene state and view.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Debug text renderer.
///
/// Produces a human-readable dump of the animated scene state. Useful for CLI
/// output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Scene (frame={}, t={:.2}s) ===\n",
            scene.frame(),
            scene.elapsed()
        ));
        out.push_str(&format!(
            "Material: {:?} color={}\n",
            scene.material_mode(),
            scene.material_color()
        ));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) fov={:.0} aspect={:.2}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees,
            view.aspect
        ));
        let rig = scene.rig().position;
        out.push_str(&format!("Rig: offset=({:.3}, {:.3})\n", rig.x, rig.y));

        out.push_str(&format!(
            "Sections: {} spaced {:.2}\n",
            scene.section_count(),
            scene.objects_distance()
        ));
        for (i, mesh) in scene.sections().iter().enumerate() {
            let p = mesh.transform.position;
            let r = mesh.transform.rotation;
            out.push_str(&format!(
                "  [{i}] {:<10} pos=({:.2}, {:.2}, {:.2}) rot=({:.2}, {:.2}, {:.2}){}\n",
                mesh.name,
                p.x,
                p.y,
                p.z,
                r.x,
                r.y,
                r.z,
                if mesh.is_spinning() { " spinning" } else { "" }
            ));
        }

        let particles = scene.particles();
        out.push_str(&format!(
            "Particles: {} rot.y={:.4}\n",
            particles.len(),
            particles.transform.rotation.y
        ));

        out
    }
}
