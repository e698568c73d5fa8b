//! 256-color palettes.

use cairn_render::Rgba;

use crate::assets::{AssetError, AssetResult};

/// A 256-entry color table for indexed sprites.
///
/// Index 0 is always transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgba; 256],
}

impl Palette {
    /// Number of entries.
    pub const SIZE: usize = 256;

    /// Bytes in a packed RGB palette file.
    pub const PACKED_LEN: usize = Self::SIZE * 3;

    /// Parses a packed palette of 256 RGB triplets.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Decode`] if `bytes` is shorter than
    /// [`Palette::PACKED_LEN`].
    pub fn from_rgb_bytes(path: &str, bytes: &[u8]) -> AssetResult<Self> {
        if bytes.len() < Self::PACKED_LEN {
            return Err(AssetError::Decode {
                path: path.to_string(),
                reason: format!("palette needs {} bytes, got {}", Self::PACKED_LEN, bytes.len()),
            });
        }

        let mut colors = [Rgba::TRANSPARENT; Self::SIZE];
        for (color, rgb) in colors.iter_mut().zip(bytes.chunks_exact(3)).skip(1) {
            *color = Rgba::rgb(rgb[0], rgb[1], rgb[2]);
        }
        Ok(Self { colors })
    }

    /// Returns the color at `index`.
    #[inline]
    #[must_use]
    pub fn color(&self, index: u8) -> Rgba {
        self.colors[usize::from(index)]
    }

    /// Returns a copy with entry `index` replaced. Index 0 stays transparent.
    #[must_use]
    pub fn with_color(mut self, index: u8, color: Rgba) -> Self {
        if index != 0 {
            self.colors[usize::from(index)] = color;
        }
        self
    }
}

impl Default for Palette {
    /// Grayscale ramp.
    fn default() -> Self {
        let mut colors = [Rgba::TRANSPARENT; Self::SIZE];
        for (level, color) in (0..=u8::MAX).zip(colors.iter_mut()).skip(1) {
            *color = Rgba::rgb(level, level, level);
        }
        Self { colors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_zero_transparent() {
        let bytes = vec![255u8; Palette::PACKED_LEN];
        let palette = Palette::from_rgb_bytes("pal.dat", &bytes).unwrap();

        assert_eq!(palette.color(0), Rgba::TRANSPARENT);
        assert_eq!(palette.color(1), Rgba::WHITE);
        assert_eq!(palette.with_color(0, Rgba::BLACK).color(0), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_packed_triplets() {
        let bytes: Vec<u8> = (0..Palette::PACKED_LEN).map(|i| (i % 251) as u8).collect();
        let palette = Palette::from_rgb_bytes("pal.dat", &bytes).unwrap();

        assert_eq!(palette.color(2), Rgba::rgb(6, 7, 8));
    }

    #[test]
    fn test_short_palette() {
        let err = Palette::from_rgb_bytes("pal.dat", &[0; 12]).unwrap_err();
        assert!(matches!(err, AssetError::Decode { path, .. } if path == "pal.dat"));
    }

    #[test]
    fn test_default_ramp() {
        let palette = Palette::default();
        assert_eq!(palette.color(128), Rgba::rgb(128, 128, 128));
    }
}
