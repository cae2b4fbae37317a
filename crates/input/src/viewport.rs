use serde::{Deserialize, Serialize};

/// Window size in logical pixels plus the device scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale_factor: f32,
    /// Upper bound on the render pixel ratio; high-DPI screens render at most
    /// this many physical pixels per logical pixel.
    pub pixel_ratio_cap: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0, 1.0)
    }
}

impl Viewport {
    pub const DEFAULT_PIXEL_RATIO_CAP: f32 = 2.0;

    pub fn new(width: f32, height: f32, scale_factor: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            scale_factor: if scale_factor > 0.0 { scale_factor } else { 1.0 },
            pixel_ratio_cap: Self::DEFAULT_PIXEL_RATIO_CAP,
        }
    }

    pub fn with_pixel_ratio_cap(mut self, cap: f32) -> Self {
        self.pixel_ratio_cap = cap.max(1.0);
        self
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.scale_factor.min(self.pixel_ratio_cap)
    }

    /// Size of the drawing buffer in pixels after applying the pixel ratio.
    pub fn drawing_size(&self) -> (u32, u32) {
        let pr = self.pixel_ratio();
        (
            (self.width * pr).round().max(1.0) as u32,
            (self.height * pr).round().max(1.0) as u32,
        )
    }
}

/// Normalized pointer offset from the viewport center.
///
/// `x` grows to the right and `y` grows downward, both in `[-0.5, 0.5]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

impl Cursor {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-0.5, 0.5),
            y: y.clamp(-0.5, 0.5),
        }
    }

    /// Normalize a pointer position given in logical pixels.
    pub fn from_pointer(px: f32, py: f32, viewport: &Viewport) -> Self {
        Self::new(px / viewport.width - 0.5, py / viewport.height - 0.5)
    }
}
