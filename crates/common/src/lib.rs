//! Shared types for the scrollfolio workspace: spatial transforms and colors.

pub mod color;
pub mod types;

pub use color::{Color, ColorError};
pub use types::Transform;

pub fn crate_info() -> &'static str {
    "scrollfolio-common v0.1.0"
}
