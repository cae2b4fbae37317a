//! Scene: the demo's meshes, particle field, light and camera rig, plus the
//! per-frame update that ties them to scroll and pointer input.
//!
//! # Invariants
//! - Section meshes sit `objects_distance` apart along -Y, one per page section.
//! - The camera rig never overshoots its parallax target.
//! - Section spins add to the continuous rotation; they never overwrite it.
//! - Scene state changes only through `tick` and the explicit setters.

pub mod camera;
pub mod config;
pub mod geometry;
pub mod intro;
pub mod material;
pub mod particles;
pub mod report;
pub mod scene;

pub use camera::{CameraRig, PerspectiveCamera};
pub use config::{ConfigError, DemoConfig, HeaderConfig, SECTION_COUNT};
pub use geometry::{MeshData, Shape};
pub use intro::HeaderIntro;
pub use material::{DirectionalLight, MaterialMode, PointsMaterial, ToonMaterial};
pub use particles::ParticleField;
pub use report::FrameReport;
pub use scene::{FrameInput, Scene, SectionMesh};

pub fn crate_info() -> &'static str {
    "scrollfolio-scene v0.1.0"
}
