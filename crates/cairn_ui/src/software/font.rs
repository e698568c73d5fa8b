//! Monospace block font.

use cairn_render::{PixelSurface, Rgba};

use crate::assets::{AssetError, AssetResult, Font};

/// A monospace font that draws each visible glyph as a solid cell.
///
/// Every character advances by `glyph_width`; the inked part of a cell is
/// one pixel narrower so neighbouring glyphs stay apart. Whitespace
/// advances without drawing. Control characters have no glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFont {
    glyph_width: u32,
    glyph_height: u32,
    color: Rgba,
}

impl BlockFont {
    /// Creates a font with the given cell size, drawing in white.
    #[must_use]
    pub const fn new(glyph_width: u32, glyph_height: u32) -> Self {
        Self {
            glyph_width,
            glyph_height,
            color: Rgba::WHITE,
        }
    }

    /// Returns the current draw color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Returns the `(width, height)` of one glyph cell.
    #[must_use]
    pub const fn glyph_size(&self) -> (u32, u32) {
        (self.glyph_width, self.glyph_height)
    }
}

impl Font<PixelSurface> for BlockFont {
    fn text_metrics(&self, text: &str) -> (u32, u32) {
        let glyphs = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        (glyphs.saturating_mul(self.glyph_width), self.glyph_height)
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn render_text(&self, text: &str, target: &mut PixelSurface) -> AssetResult<()> {
        if let Some(glyph) = text.chars().find(|c| c.is_control()) {
            return Err(AssetError::UnsupportedGlyph(glyph));
        }

        let advance = i32::try_from(self.glyph_width).unwrap_or(i32::MAX);
        let ink = self.glyph_width.saturating_sub(1).max(1);
        let mut x = 0i32;

        for glyph in text.chars() {
            if !glyph.is_whitespace() {
                target.fill_rect(x, 0, ink, self.glyph_height, self.color);
            }
            x = x.saturating_add(advance);
        }

        Ok(())
    }
}
