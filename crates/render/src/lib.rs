//! Rendering Adapter: renderer-agnostic interface over the demo scene.
//!
//! # Invariants
//! - Renderers cannot mutate the scene.
//! - Render state derives from scene state and view.
//!
//! The GPU backend lives in `scrollfolio-render-wgpu`; the debug text renderer
//! here serves the CLI and tests.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "scrollfolio-render v0.1.0"
}
