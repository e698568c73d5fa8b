//! Palette-indexed sprite sheets and their decoded form.

use cairn_render::{Filter, PixelSurface, Surface};
use image::RgbaImage;

use super::palette::Palette;
use crate::assets::{Animation, AssetError, AssetResult};

/// One frame of palette indices, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFrame {
    width: u32,
    height: u32,
    indices: Vec<u8>,
}

impl IndexedFrame {
    /// Creates a frame from raw indices.
    #[must_use]
    pub fn new(width: u32, height: u32, indices: Vec<u8>) -> Self {
        Self {
            width,
            height,
            indices,
        }
    }

    /// Creates a frame filled with a single palette index.
    #[must_use]
    pub fn solid(width: u32, height: u32, index: u8) -> Self {
        let len = width as usize * height as usize;
        Self::new(width, height, vec![index; len])
    }

    /// Frame width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    fn decode(&self, path: &str, palette: &Palette) -> AssetResult<RgbaImage> {
        let expected = self.width as usize * self.height as usize;
        if self.indices.len() != expected {
            return Err(AssetError::Decode {
                path: path.to_string(),
                reason: format!(
                    "{}x{} frame carries {} indices",
                    self.width,
                    self.height,
                    self.indices.len()
                ),
            });
        }

        let raw = self
            .indices
            .iter()
            .flat_map(|&index| {
                let color = palette.color(index);
                [color.r, color.g, color.b, color.a]
            })
            .collect();

        RgbaImage::from_raw(self.width, self.height, raw).ok_or_else(|| AssetError::Decode {
            path: path.to_string(),
            reason: "pixel buffer size mismatch".to_string(),
        })
    }
}

/// An undecoded sprite sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteSheet {
    frames: Vec<IndexedFrame>,
}

impl SpriteSheet {
    /// Creates a sheet from its frames, in storage order.
    #[must_use]
    pub fn new(frames: Vec<IndexedFrame>) -> Self {
        Self { frames }
    }

    /// Number of frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Resolves every frame against `palette`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Decode`] for frames whose index buffer does not
    /// match their dimensions.
    pub fn decode(&self, path: &str, palette: &Palette) -> AssetResult<DecodedAnimation> {
        let frames = self
            .frames
            .iter()
            .map(|frame| {
                frame
                    .decode(path, palette)
                    .map(|image| PixelSurface::from_image(image, Filter::Nearest))
            })
            .collect::<AssetResult<Vec<_>>>()?;

        Ok(DecodedAnimation { frames })
    }
}

/// A sprite sheet resolved to RGBA surfaces.
#[derive(Debug, Clone)]
pub struct DecodedAnimation {
    frames: Vec<PixelSurface>,
}

impl DecodedAnimation {
    fn frame(&self, index: usize) -> AssetResult<&PixelSurface> {
        self.frames.get(index).ok_or(AssetError::FrameOutOfRange {
            index,
            count: self.frames.len(),
        })
    }
}

impl Animation<PixelSurface> for DecodedAnimation {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn frame_size(&self, index: usize) -> AssetResult<(u32, u32)> {
        self.frame(index).map(Surface::size)
    }

    fn render_frame(&self, index: usize, target: &mut PixelSurface) -> AssetResult<()> {
        target.render(self.frame(index)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_render::Rgba;

    #[test]
    fn test_decode_applies_palette() {
        let palette = Palette::default().with_color(7, Rgba::rgb(1, 2, 3));
        let sheet = SpriteSheet::new(vec![IndexedFrame::new(2, 1, vec![0, 7])]);

        let animation = sheet.decode("sheet.dc6", &palette).unwrap();
        let frame = animation.frame(0).unwrap();

        assert_eq!(animation.frame_count(), 1);
        assert_eq!(frame.pixel(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(frame.pixel(1, 0), Some(Rgba::rgb(1, 2, 3)));
    }

    #[test]
    fn test_decode_rejects_short_frame() {
        let sheet = SpriteSheet::new(vec![
            IndexedFrame::solid(2, 2, 1),
            IndexedFrame::new(3, 3, vec![1; 4]),
        ]);

        let err = sheet.decode("bad.dc6", &Palette::default()).unwrap_err();
        assert!(matches!(err, AssetError::Decode { path, .. } if path == "bad.dc6"));
    }

    #[test]
    fn test_frame_out_of_range() {
        let sheet = SpriteSheet::new(vec![IndexedFrame::solid(1, 1, 1)]);
        let animation = sheet.decode("one.dc6", &Palette::default()).unwrap();

        assert_eq!(
            animation.frame_size(3),
            Err(AssetError::FrameOutOfRange { index: 3, count: 1 })
        );
    }
}
