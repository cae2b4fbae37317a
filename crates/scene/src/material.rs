use crate::config::LightConfig;
use glam::Vec3;
use scrollfolio_common::Color;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Cel shading: the Lambert term is quantized through a gradient ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct ToonMaterial {
    pub color: Color,
    /// Ramp image; renderers fall back to a built-in ramp when unset.
    pub gradient: Option<PathBuf>,
}

/// Flat-colored point sprites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsMaterial {
    pub color: Color,
    /// Sprite size in world units at unit depth.
    pub size: f32,
    /// Shrink sprites with distance from the camera.
    pub size_attenuation: bool,
}

/// Which material all section meshes currently use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialMode {
    #[default]
    Toon,
    Normal,
}

impl MaterialMode {
    pub fn from_normals(on: bool) -> Self {
        if on { Self::Normal } else { Self::Toon }
    }
}

/// Light arriving from `position` toward the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    pub fn from_config(config: &LightConfig) -> Self {
        Self {
            color: config.color,
            intensity: config.intensity,
            position: config.position,
        }
    }

    /// Unit vector from the lit surface toward the light.
    pub fn direction(&self) -> Vec3 {
        self.position.try_normalize().unwrap_or(Vec3::Y)
    }

    /// Linear-space radiance (color times intensity).
    pub fn radiance(&self) -> Vec3 {
        Vec3::from(self.color.to_linear()) * self.intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_direction_is_normalized() {
        let light = DirectionalLight::from_config(&LightConfig::default());
        let d = light.direction();
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!((d.x - d.y).abs() < 1e-6 && d.z == 0.0);
        assert_eq!(light.radiance(), Vec3::splat(3.0));
    }

    #[test]
    fn light_at_origin_points_up() {
        let light = DirectionalLight {
            color: Color::WHITE,
            intensity: 1.0,
            position: Vec3::ZERO,
        };
        assert_eq!(light.direction(), Vec3::Y);
    }

    #[test]
    fn mode_from_flag() {
        assert_eq!(MaterialMode::from_normals(true), MaterialMode::Normal);
        assert_eq!(MaterialMode::from_normals(false), MaterialMode::Toon);
        assert_eq!(MaterialMode::default(), MaterialMode::Toon);
    }
}
