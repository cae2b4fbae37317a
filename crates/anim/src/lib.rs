//! Animation primitives: easing curves, tweens, timelines and a frame clock.
//!
//! # Invariants
//! - Every ease maps 0 to 0 and 1 to 1; inputs outside `[0, 1]` are clamped.
//! - Tweens are pure functions of local time; players own the elapsed time.
//! - Timeline tracks hold their `from` value until they start.

pub mod clock;
pub mod ease;
pub mod timeline;
pub mod tween;

pub use clock::{Clock, FrameTime};
pub use ease::{Ease, EaseDirection, EaseError};
pub use timeline::Timeline;
pub use tween::{Lerp, Tween, TweenPlayer};

pub fn crate_info() -> &'static str {
    "scrollfolio-anim v0.1.0"
}
