use std::path::Path;

/// Errors from loading a gradient ramp image.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("image has no pixels")]
    Empty,
}

/// RGBA8 lookup ramp for the toon material, sampled with nearest filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientMap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl GradientMap {
    /// Three flat bands: shadow, mid-tone, highlight.
    pub fn builtin() -> Self {
        Self::from_levels(&[0, 128, 255])
    }

    /// A 1-pixel-high ramp with one gray texel per level.
    pub fn from_levels(levels: &[u8]) -> Self {
        let rgba = levels.iter().flat_map(|&l| [l, l, l, 255]).collect();
        Self {
            width: levels.len().max(1) as u32,
            height: 1,
            rgba,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let image = image::open(path.as_ref())?.to_rgba8();
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty);
        }
        Ok(Self {
            width,
            height,
            rgba: image.into_raw(),
        })
    }

    /// Load `path`, falling back to the built-in ramp with a warning.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load(path) {
            Ok(map) => {
                tracing::info!(path = %path.display(), width = map.width, "gradient map loaded");
                map
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "gradient map unavailable ({e}), using built-in ramp");
                Self::builtin()
            }
        }
    }

    pub(crate) fn upload(&self, device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
        let size = wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("gradient_texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &self.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            size,
        );
        texture.create_view(&Default::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ramp_has_three_bands() {
        let map = GradientMap::builtin();
        assert_eq!((map.width, map.height), (3, 1));
        assert_eq!(map.rgba, vec![0, 0, 0, 255, 128, 128, 128, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn loads_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ramp.png");
        image::GrayImage::from_raw(5, 1, vec![0, 60, 120, 180, 240])
            .unwrap()
            .save(&path)
            .unwrap();
        let map = GradientMap::load(&path).unwrap();
        assert_eq!((map.width, map.height), (5, 1));
        assert_eq!(&map.rgba[4..8], &[60, 60, 60, 255]);
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.png");
        assert!(GradientMap::load(&missing).is_err());
        assert_eq!(GradientMap::load_or_builtin(Some(&missing)), GradientMap::builtin());
        assert_eq!(GradientMap::load_or_builtin(None), GradientMap::builtin());
    }
}
