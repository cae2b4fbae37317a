use glam::{Vec2, Vec3};
use scrollfolio_anim::{Ease, EaseDirection};
use scrollfolio_common::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Page sections: one section mesh and one header each.
pub const SECTION_COUNT: usize = 3;

/// Errors from loading or validating a demo configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything that shapes the demo, loadable from YAML.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Color shared by the toon material and the particles.
    pub material_color: Color,
    /// Clear color behind the scene.
    pub background_color: Color,
    /// Vertical spacing between section meshes, in world units.
    pub objects_distance: f32,
    /// Gradient ramp used by the toon material. A built-in 3-step ramp is
    /// used when unset or unreadable.
    pub gradient_texture: Option<PathBuf>,
    pub pixel_ratio_cap: f32,
    pub particles: ParticleConfig,
    pub motion: MotionConfig,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub section_spin: SpinConfig,
    pub headers: Vec<HeaderConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    /// Width and depth of the field on X and Z.
    pub spread: f32,
    pub size: f32,
    pub size_attenuation: bool,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Continuous mesh spin in radians per second about X and Y.
    pub mesh_spin: Vec2,
    /// Particle field spin about Y in radians per second.
    pub particle_spin: f32,
    /// Camera rig offset per unit of normalized cursor offset.
    pub parallax_strength: f32,
    /// Exponential damping rate of the rig toward its target, per second.
    pub parallax_damping: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Camera distance from the rig along +Z.
    pub distance: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
}

/// Relative rotation played on a section mesh when its section scrolls in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    pub duration: f32,
    pub ease: Ease,
    pub delta: Vec3,
}

/// One header of the entrance animation: slides on X from `from_x` to `to_x`
/// (logical pixels), starting `at` seconds after launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderConfig {
    pub text: String,
    pub from_x: f32,
    pub to_x: f32,
    pub ease: Ease,
    pub duration: f32,
    pub at: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            material_color: Color::from_srgb_u8([0xff, 0xed, 0xed]),
            background_color: Color::from_srgb_u8([0x1e, 0x1a, 0x20]),
            objects_distance: 4.0,
            gradient_texture: Some(PathBuf::from("assets/textures/gradients/3.png")),
            pixel_ratio_cap: 2.0,
            particles: ParticleConfig::default(),
            motion: MotionConfig::default(),
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            section_spin: SpinConfig::default(),
            headers: default_headers(),
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            spread: 10.0,
            size: 0.01,
            size_attenuation: true,
            seed: 42,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            mesh_spin: Vec2::new(0.1, 0.12),
            particle_spin: 0.005,
            parallax_strength: 0.5,
            parallax_damping: 5.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 35.0,
            near: 0.1,
            far: 100.0,
            distance: 6.0,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            intensity: 3.0,
            position: Vec3::new(1.0, 1.0, 0.0),
        }
    }
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration: 1.5,
            ease: Ease::Power(2, EaseDirection::InOut),
            delta: Vec3::new(6.0, 3.0, 1.5),
        }
    }
}

fn default_headers() -> Vec<HeaderConfig> {
    vec![
        HeaderConfig {
            text: "My Portfolio".into(),
            from_x: -1200.0,
            to_x: -100.0,
            ease: Ease::Bounce(EaseDirection::Out),
            duration: 2.0,
            at: 0.0,
        },
        HeaderConfig {
            text: "My projects".into(),
            from_x: 1200.0,
            to_x: 0.0,
            ease: Ease::Expo(EaseDirection::Out),
            duration: 2.0,
            at: 4.0,
        },
        HeaderConfig {
            text: "Contact me".into(),
            from_x: -1200.0,
            to_x: 0.0,
            ease: Ease::Steps(12),
            duration: 4.0,
            at: 8.0,
        },
    ]
}

impl DemoConfig {
    /// Load and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded demo config");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Number of page sections. `validate` ties the header list to it.
    pub fn sections(&self) -> usize {
        SECTION_COUNT
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));
        if !(self.objects_distance > 0.0) {
            return invalid("objects_distance must be positive");
        }
        if self.headers.len() != SECTION_COUNT {
            return Err(ConfigError::Invalid(format!(
                "expected {SECTION_COUNT} headers (one per section), got {}",
                self.headers.len()
            )));
        }
        if self.headers.iter().any(|h| !(h.duration >= 0.0 && h.at >= 0.0)) {
            return invalid("header durations and offsets must not be negative");
        }
        if self.particles.count == 0 {
            return invalid("particles.count must be at least 1");
        }
        if !(self.particles.size > 0.0) || !(self.particles.spread > 0.0) {
            return invalid("particles.size and particles.spread must be positive");
        }
        if !(self.camera.fov_degrees > 0.0 && self.camera.fov_degrees < 180.0) {
            return invalid("camera.fov_degrees must be in (0, 180)");
        }
        if !(self.camera.near > 0.0 && self.camera.far > self.camera.near) {
            return invalid("camera clip planes must satisfy 0 < near < far");
        }
        if !(self.section_spin.duration > 0.0) {
            return invalid("section_spin.duration must be positive");
        }
        if !(self.motion.parallax_damping >= 0.0) {
            return invalid("motion.parallax_damping must not be negative");
        }
        if !(self.pixel_ratio_cap >= 1.0) {
            return invalid("pixel_ratio_cap must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let c = DemoConfig::default();
        c.validate().unwrap();
        assert_eq!(c.sections(), 3);
        assert_eq!(c.material_color.to_hex(), "#ffeded");
        assert_eq!(c.particles.count, 10_000);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let c = DemoConfig::from_yaml_str(
            "material_color: \"#336699\"\nparticles:\n  count: 500\n",
        )
        .unwrap();
        assert_eq!(c.material_color.to_hex(), "#336699");
        assert_eq!(c.particles.count, 500);
        assert_eq!(c.particles.spread, 10.0);
        assert_eq!(c.objects_distance, 4.0);
    }

    #[test]
    fn yaml_roundtrip_preserves_config() {
        let c = DemoConfig::default();
        let text = c.to_yaml().unwrap();
        assert!(text.contains("power2.inOut"));
        assert!(text.contains("steps(12)"));
        assert_eq!(DemoConfig::from_yaml_str(&text).unwrap(), c);
    }

    #[test]
    fn rejects_invalid_values() {
        for yaml in [
            "objects_distance: 0\n",
            "headers: []\n",
            "particles:\n  count: 0\n",
            "camera:\n  near: 5\n  far: 1\n",
            "camera:\n  fov_degrees: 190\n",
            "section_spin:\n  duration: 0\n",
            "pixel_ratio_cap: 0.5\n",
            "pixel_ratio_cap: .nan\n",
            "motion:\n  parallax_damping: .nan\n",
            "motion:\n  parallax_damping: -1\n",
        ] {
            assert!(
                matches!(DemoConfig::from_yaml_str(yaml), Err(ConfigError::Invalid(_))),
                "{yaml}"
            );
        }
    }

    #[test]
    fn header_count_must_match_sections() {
        let mut c = DemoConfig::default();
        let extra = c.headers[0].clone();
        c.headers.push(extra.clone());
        c.headers.push(extra);
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));

        c.headers.truncate(1);
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));

        let c = DemoConfig::default();
        assert_eq!(c.headers.len(), c.sections());
        assert_eq!(crate::Scene::build(&c).section_count(), c.sections());
    }

    #[test]
    fn rejects_bad_ease_and_color() {
        assert!(matches!(
            DemoConfig::from_yaml_str("section_spin:\n  ease: wobble\n"),
            Err(ConfigError::Yaml(_))
        ));
        assert!(matches!(
            DemoConfig::from_yaml_str("material_color: red\n"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "objects_distance: 5.5").unwrap();
        let c = DemoConfig::load(file.path()).unwrap();
        assert_eq!(c.objects_distance, 5.5);

        let missing = DemoConfig::load(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
        assert_eq!(DemoConfig::load_or_default(None).unwrap(), DemoConfig::default());
    }
}
