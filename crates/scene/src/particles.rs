use crate::config::ParticleConfig;
use crate::material::PointsMaterial;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scrollfolio_common::{Color, Transform};

/// A static cloud of points spread through the whole scroll column.
#[derive(Debug, Clone)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    pub transform: Transform,
    pub material: PointsMaterial,
}

impl ParticleField {
    /// Scatter particles over `spread` on X and Z, and on Y from half a section
    /// above the first mesh down to the bottom of the last section.
    pub fn generate(config: &ParticleConfig, color: Color, objects_distance: f32, sections: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let column = objects_distance * sections as f32;
        let positions = (0..config.count)
            .map(|_| {
                Vec3::new(
                    (rng.random::<f32>() - 0.5) * config.spread,
                    objects_distance * 0.5 - rng.random::<f32>() * column,
                    (rng.random::<f32>() - 0.5) * config.spread,
                )
            })
            .collect();
        Self {
            positions,
            transform: Transform::default(),
            material: PointsMaterial {
                color,
                size: config.size,
                size_attenuation: config.size_attenuation,
            },
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
