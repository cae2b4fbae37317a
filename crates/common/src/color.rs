use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors from parsing color strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("expected 3 or 6 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// An sRGB color with components in `[0, 1]`.
///
/// Colors are authored as hex strings (`#ffeded`) and serialized the same way.
/// Shading happens in linear space; use [`Color::to_linear`] before uploading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(ColorError::BadLength(s.to_string())),
        };
        if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }
        let value =
            u32::from_str_radix(&expanded, 16).map_err(|_| ColorError::BadDigit(s.to_string()))?;
        Ok(Self::from_srgb_u8([
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ]))
    }

    pub fn from_srgb_u8(rgb: [u8; 3]) -> Self {
        Self::new(
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
        )
    }

    pub fn to_srgb_u8(&self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_srgb_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Convert to linear-space RGB for lighting math.
    pub fn to_linear(&self) -> [f32; 3] {
        fn channel(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let c = Color::from_hex("#ffeded").unwrap();
        assert_eq!(c.to_srgb_u8(), [0xff, 0xed, 0xed]);
        assert_eq!(c.to_hex(), "#ffeded");
    }

    #[test]
    fn parses_short_hex() {
        let c: Color = "#fff".parse().unwrap();
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(matches!(Color::from_hex("ffeded"), Err(ColorError::MissingHash(_))));
        assert!(matches!(Color::from_hex("#ffee"), Err(ColorError::BadLength(_))));
        assert!(matches!(Color::from_hex("#gggggg"), Err(ColorError::BadDigit(_))));
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(Color::BLACK.to_linear(), [0.0, 0.0, 0.0]);
        let w = Color::WHITE.to_linear();
        assert!(w.iter().all(|c| (c - 1.0).abs() < 1e-6));
        let mid = Color::new(0.5, 0.5, 0.5).to_linear();
        assert!(mid[0] < 0.5 && mid[0] > 0.2);
    }

    #[test]
    fn serializes_as_hex_string() {
        let c = Color::from_hex("#336699").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#336699\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_hex(), "#336699");
    }
}
