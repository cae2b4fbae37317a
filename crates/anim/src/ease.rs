use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Errors from parsing ease names such as `power2.inOut` or `steps(12)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EaseError {
    #[error("unknown ease curve: {0:?}")]
    UnknownCurve(String),
    #[error("unknown ease direction {direction:?} in {name:?}")]
    UnknownDirection { name: String, direction: String },
    #[error("steps() needs a positive integer count: {0:?}")]
    BadSteps(String),
}

/// Which end of the curve the easing is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseDirection {
    In,
    Out,
    InOut,
}

impl EaseDirection {
    fn suffix(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inOut",
        }
    }

    /// Derive out/inOut variants from an ease-in function.
    fn apply(self, t: f32, ease_in: impl Fn(f32) -> f32) -> f32 {
        match self {
            Self::In => ease_in(t),
            Self::Out => 1.0 - ease_in(1.0 - t),
            Self::InOut => {
                if t < 0.5 {
                    ease_in(2.0 * t) / 2.0
                } else {
                    1.0 - ease_in(2.0 * (1.0 - t)) / 2.0
                }
            }
        }
    }
}

/// Easing curve, named the way GSAP names them.
///
/// `Power(n)` is `t^(n + 1)` for the ease-in form, so `power1` is quadratic and
/// `power2` is cubic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    Linear,
    Power(u8, EaseDirection),
    Sine(EaseDirection),
    Expo(EaseDirection),
    Bounce(EaseDirection),
    /// Holds `n + 1` plateaus of height `1/n`; the last one (value 1) starts
    /// at `n / (n + 1)`.
    Steps(u32),
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power(1, EaseDirection::Out)
    }
}

impl Ease {
    /// Map linear progress `t` to eased progress.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::Power(n, dir) => dir.apply(t, |x| x.powi(n as i32 + 1)),
            Ease::Sine(dir) => dir.apply(t, |x| 1.0 - (x * PI / 2.0).cos()),
            Ease::Expo(dir) => dir.apply(t, |x| {
                if x <= 0.0 {
                    0.0
                } else {
                    2f32.powf(10.0 * (x - 1.0))
                }
            }),
            Ease::Bounce(dir) => dir.apply(t, |x| 1.0 - bounce_out(1.0 - x)),
            Ease::Steps(n) => {
                let plateau = ((n + 1) as f32 * t.min(1.0 - f32::EPSILON)).floor();
                (plateau / n as f32).min(1.0)
            }
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::Linear => f.write_str("none"),
            Ease::Power(n, dir) => write!(f, "power{n}.{}", dir.suffix()),
            Ease::Sine(dir) => write!(f, "sine.{}", dir.suffix()),
            Ease::Expo(dir) => write!(f, "expo.{}", dir.suffix()),
            Ease::Bounce(dir) => write!(f, "bounce.{}", dir.suffix()),
            Ease::Steps(n) => write!(f, "steps({n})"),
        }
    }
}

impl FromStr for Ease {
    type Err = EaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if let Some(inner) = name.strip_prefix("steps(").and_then(|r| r.strip_suffix(')')) {
            return match inner.trim().parse::<u32>() {
                Ok(n) if n > 0 => Ok(Ease::Steps(n)),
                _ => Err(EaseError::BadSteps(name.to_string())),
            };
        }

        let (curve, direction) = match name.split_once('.') {
            Some((c, d)) => (c, Some(d)),
            None => (name, None),
        };
        // GSAP defaults to `.out` when no direction is given.
        let dir = match direction {
            None | Some("out") => EaseDirection::Out,
            Some("in") => EaseDirection::In,
            Some("inOut") => EaseDirection::InOut,
            Some(other) => {
                return Err(EaseError::UnknownDirection {
                    name: name.to_string(),
                    direction: other.to_string(),
                });
            }
        };

        match curve {
            "none" | "linear" | "power0" => Ok(Ease::Linear),
            "power1" | "quad" => Ok(Ease::Power(1, dir)),
            "power2" | "cubic" => Ok(Ease::Power(2, dir)),
            "power3" | "quart" => Ok(Ease::Power(3, dir)),
            "power4" | "quint" | "strong" => Ok(Ease::Power(4, dir)),
            "sine" => Ok(Ease::Sine(dir)),
            "expo" => Ok(Ease::Expo(dir)),
            "bounce" => Ok(Ease::Bounce(dir)),
            _ => Err(EaseError::UnknownCurve(name.to_string())),
        }
    }
}

impl TryFrom<String> for Ease {
    type Error = EaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.to_string()
    }
}
