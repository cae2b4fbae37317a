use crate::ease::Ease;
use glam::Vec3;
use std::ops::{Add, Sub};

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec3::lerp(self, to, t)
    }
}

/// Interpolation of a value from `from` to `to` over `duration` seconds.
///
/// A tween is stateless: [`Tween::sample`] maps a local time to a value.
/// Use [`TweenPlayer`] to advance one by frame deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub duration: f32,
    pub ease: Ease,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            ease,
        }
    }

    /// Eased progress in `[0, 1]` at local time `t`.
    pub fn progress(&self, t: f32) -> f32 {
        if self.duration <= 0.0 {
            return if t >= 0.0 { 1.0 } else { 0.0 };
        }
        self.ease.apply(t / self.duration)
    }

    pub fn sample(&self, t: f32) -> T {
        if t <= 0.0 && self.duration > 0.0 {
            return self.from;
        }
        if t >= self.duration {
            return self.to;
        }
        self.from.lerp(self.to, self.progress(t))
    }

    pub fn is_finished(&self, t: f32) -> bool {
        t >= self.duration
    }
}

impl<T: Lerp + Add<Output = T>> Tween<T> {
    /// Relative tween: animate from `start` to `start + delta`.
    pub fn by(start: T, delta: T, duration: f32, ease: Ease) -> Self {
        Self::new(start, start + delta, duration, ease)
    }
}

/// Plays a tween forward frame by frame.
///
/// [`TweenPlayer::advance`] returns the change in value since the previous
/// frame so the caller can add it on top of other motion instead of
/// overwriting it.
#[derive(Debug, Clone)]
pub struct TweenPlayer<T> {
    tween: Tween<T>,
    elapsed: f32,
    current: T,
}

impl<T: Lerp + Sub<Output = T>> TweenPlayer<T> {
    pub fn new(tween: Tween<T>) -> Self {
        Self {
            current: tween.from,
            tween,
            elapsed: 0.0,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn value(&self) -> T {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.tween.is_finished(self.elapsed)
    }

    /// Advance by `dt` seconds and return the increment applied this frame.
    pub fn advance(&mut self, dt: f32) -> T {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.tween.duration);
        let next = self.tween.sample(self.elapsed);
        let step = next - self.current;
        self.current = next;
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ease::EaseDirection;

    #[test]
    fn sample_clamps_to_endpoints() {
        let t = Tween::new(-1200.0f32, -100.0, 2.0, Ease::Linear);
        assert_eq!(t.sample(-1.0), -1200.0);
        assert_eq!(t.sample(0.0), -1200.0);
        assert_eq!(t.sample(1.0), -650.0);
        assert_eq!(t.sample(2.0), -100.0);
        assert_eq!(t.sample(10.0), -100.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let t = Tween::new(0.0f32, 5.0, 0.0, Ease::Linear);
        assert_eq!(t.sample(0.0), 5.0);
        assert!(t.is_finished(0.0));
        let neg = Tween::new(0.0f32, 5.0, -3.0, Ease::Linear);
        assert_eq!(neg.duration, 0.0);
    }

    #[test]
    fn relative_tween_adds_delta() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let t = Tween::by(
            start,
            Vec3::new(6.0, 3.0, 1.5),
            1.5,
            Ease::Power(2, EaseDirection::InOut),
        );
        assert_eq!(t.to, Vec3::new(7.0, 5.0, 4.5));
        let mid = t.sample(0.75);
        assert!((mid - Vec3::new(4.0, 3.5, 3.75)).length() < 1e-5);
    }

    #[test]
    fn player_increments_sum_to_delta() {
        let delta = Vec3::new(6.0, 3.0, 1.5);
        let mut player = TweenPlayer::new(Tween::by(
            Vec3::ZERO,
            delta,
            1.5,
            Ease::Power(2, EaseDirection::InOut),
        ));
        let mut total = Vec3::ZERO;
        for _ in 0..200 {
            total += player.advance(1.0 / 60.0);
        }
        assert!(player.is_finished());
        assert!((total - delta).length() < 1e-4);
        // Further frames contribute nothing.
        assert_eq!(player.advance(0.5), Vec3::ZERO);
    }

    #[test]
    fn player_ignores_negative_dt() {
        let mut player = TweenPlayer::new(Tween::new(0.0f32, 1.0, 1.0, Ease::Linear));
        player.advance(0.5);
        assert_eq!(player.advance(-1.0), 0.0);
        assert_eq!(player.elapsed(), 0.5);
        assert_eq!(player.value(), 0.5);
    }
}
