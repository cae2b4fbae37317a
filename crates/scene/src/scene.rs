use crate::camera::{CameraRig, PerspectiveCamera};
use crate::config::{DemoConfig, MotionConfig, SECTION_COUNT, SpinConfig};
use crate::geometry::Shape;
use crate::material::{DirectionalLight, MaterialMode, ToonMaterial};
use crate::particles::ParticleField;
use glam::{Vec2, Vec3};
use scrollfolio_anim::{Tween, TweenPlayer};
use scrollfolio_common::{Color, Transform};
use scrollfolio_input::{Cursor, InputState};

/// Per-frame input sampled from the input state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Scroll offset in sections (`scroll_y / page_height`).
    pub scroll_progress: f32,
    pub cursor: Cursor,
}

impl FrameInput {
    pub fn from_input(input: &InputState) -> Self {
        Self {
            scroll_progress: input.scroll().progress(),
            cursor: input.cursor(),
        }
    }
}

/// One mesh per page section.
#[derive(Debug, Clone)]
pub struct SectionMesh {
    pub name: String,
    pub shape: Shape,
    pub transform: Transform,
    spin: Option<TweenPlayer<Vec3>>,
}

impl SectionMesh {
    fn new(name: &str, shape: Shape, position: Vec3) -> Self {
        Self {
            name: name.to_string(),
            shape,
            transform: Transform::from_position(position),
            spin: None,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.as_ref().is_some_and(|s| !s.is_finished())
    }
}

/// The whole demo scene.
///
/// Built once from a [`DemoConfig`], then advanced by [`Scene::tick`] every
/// frame. Renderers only read it.
#[derive(Debug, Clone)]
pub struct Scene {
    sections: Vec<SectionMesh>,
    particles: ParticleField,
    rig: CameraRig,
    light: DirectionalLight,
    toon: ToonMaterial,
    mode: MaterialMode,
    background: Color,
    objects_distance: f32,
    motion: MotionConfig,
    spin: SpinConfig,
    elapsed: f32,
    frame: u64,
}

impl Scene {
    pub fn build(config: &DemoConfig) -> Self {
        let d = config.objects_distance;
        let shapes: [(&str, Shape, f32); SECTION_COUNT] = [
            (
                "torus",
                Shape::Torus {
                    radius: 1.0,
                    tube: 0.4,
                    radial_segments: 16,
                    tubular_segments: 60,
                },
                2.0,
            ),
            (
                "cone",
                Shape::Cone {
                    radius: 1.0,
                    height: 2.0,
                    radial_segments: 32,
                },
                -2.5,
            ),
            (
                "torus_knot",
                Shape::TorusKnot {
                    radius: 0.8,
                    tube: 0.35,
                    tubular_segments: 100,
                    radial_segments: 15,
                    p: 2,
                    q: 3,
                },
                2.0,
            ),
        ];
        let sections: Vec<SectionMesh> = shapes
            .iter()
            .enumerate()
            .map(|(i, (name, shape, x))| {
                SectionMesh::new(name, *shape, Vec3::new(*x, -d * i as f32, 0.0))
            })
            .collect();

        let particles = ParticleField::generate(
            &config.particles,
            config.material_color,
            d,
            sections.len(),
        );

        tracing::info!(
            sections = sections.len(),
            particles = particles.len(),
            objects_distance = d,
            "scene built"
        );

        Self {
            sections,
            particles,
            rig: CameraRig::new(PerspectiveCamera::from_config(&config.camera, 16.0 / 9.0)),
            light: DirectionalLight::from_config(&config.light),
            toon: ToonMaterial {
                color: config.material_color,
                gradient: config.gradient_texture.clone(),
            },
                    mode: MaterialMode::Toon,
            background: config.background_color,
            objects_distance: d,
            motion: config.motion.clone(),
            spin: config.section_spin.clone(),
            elapsed: 0.0,
            frame: 0,
        }
    }

    pub fn sections(&self) -> &[SectionMesh] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    pub fn toon_material(&self) -> &ToonMaterial {
        &self.toon
    }

    pub fn material_mode(&self) -> MaterialMode {
        self.mode
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Vertical spacing between section meshes.
    pub fn objects_distance(&self) -> f32 {
        self.objects_distance
    }

    /// Seconds of animation applied so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn material_color(&self) -> Color {
        self.toon.color
    }

    /// Recolor the toon material and the particles together.
    pub fn set_material_color(&mut self, color: Color) {
        self.toon.color = color;
        self.particles.material.color = color;
    }

    /// Swap every section mesh between toon and normal shading.
    pub fn set_normals(&mut self, on: bool) {
        let mode = MaterialMode::from_normals(on);
        if mode != self.mode {
            tracing::debug!(?mode, "material mode changed");
        }
        self.mode = mode;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.rig.set_aspect(aspect);
    }

    /// Play the section-change spin on mesh `index`. Returns false (and does
    /// nothing) if there is no such mesh.
    pub fn start_section_spin(&mut self, index: usize) -> bool {
        let Some(mesh) = self.sections.get_mut(index) else {
            tracing::warn!(index, count = self.sections.len(), "no mesh for section");
            return false;
        };
        // Relative tween: it only ever contributes the delta, so the base
        // rotation keeps whatever an interrupted spin had already applied.
        mesh.spin = Some(TweenPlayer::new(Tween::by(
            Vec3::ZERO,
            self.spin.delta,
            self.spin.duration,
            self.spin.ease,
        )));
        tracing::debug!(index, mesh = %mesh.name, "section spin started");
        true
    }

    /// Advance the scene by `dt` seconds.
    pub fn tick(&mut self, dt: f32, input: &FrameInput) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        self.frame += 1;

        let spin_rate = self.motion.mesh_spin;
        for mesh in &mut self.sections {
            mesh.transform.rotation.x += dt * spin_rate.x;
            mesh.transform.rotation.y += dt * spin_rate.y;
            if let Some(player) = &mut mesh.spin {
                mesh.transform.rotation += player.advance(dt);
                if player.is_finished() {
                    mesh.spin = None;
                }
            }
        }

        self.rig.camera.position.y = -input.scroll_progress * self.objects_distance;

        self.particles.transform.rotation.y += dt * self.motion.particle_spin;

        let strength = self.motion.parallax_strength;
        let target = Vec2::new(input.cursor.x * strength, -input.cursor.y * strength);
        self.rig.follow(target, self.motion.parallax_damping, dt);
    }
}
