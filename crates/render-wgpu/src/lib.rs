//! wgpu render backend for the scrollfolio scene.
//!
//! Draws the section meshes with a toon (gradient-ramp) or normal material and
//! the particle field as camera-facing billboards.
//!
//! # Invariants
//! - Renderer never mutates scene state.
//! - Geometry is uploaded once; only uniforms change per frame.
//! - Camera math lives in the scene crate; this crate only consumes matrices.

mod gpu;
mod shaders;
mod texture;

pub use gpu::WgpuRenderer;
pub use texture::{GradientMap, TextureError};
