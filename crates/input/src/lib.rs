//! Input: pointer, scroll and viewport events mapped to shared actions.
//!
//! Windowing backends translate raw events into [`InputAction`]s; the
//! [`InputState`] folds them into cursor, scroll and viewport state and reports
//! the effects the scene must react to (section changes, resizes, toggles).
//!
//! # Invariants
//! - The cursor offset stays within `[-0.5, 0.5]` on both axes.
//! - Scroll is clamped to the page; the section index is always a valid section.
//! - A section change is reported only when the rounded index changes.

pub mod action;
pub mod scroll;
pub mod state;
pub mod viewport;

pub use action::{InputAction, InputEffect};
pub use scroll::{ScrollState, SectionChange};
pub use state::InputState;
pub use viewport::{Cursor, Viewport};

pub fn crate_info() -> &'static str {
    "scrollfolio-input v0.1.0"
}
