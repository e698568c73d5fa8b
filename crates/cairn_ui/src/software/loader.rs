//! In-memory asset loader.

use std::collections::HashMap;

use cairn_render::PixelSurface;

use super::font::BlockFont;
use super::palette::Palette;
use super::sheet::{DecodedAnimation, SpriteSheet};
use crate::assets::{AssetError, AssetLoader, AssetResult};
use crate::style::FontStyle;

/// Serves sprite sheets, palettes and fonts registered up front.
///
/// Sheets and palettes are keyed by resource path, fonts by style. Every
/// load hands out a fresh decoded animation or font copy, so widgets never
/// share mutable font state.
#[derive(Debug, Clone, Default)]
pub struct SoftwareAssets {
    sheets: HashMap<String, SpriteSheet>,
    palettes: HashMap<String, Palette>,
    fonts: HashMap<FontStyle, BlockFont>,
}

impl SoftwareAssets {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a sprite sheet under `path`.
    #[must_use]
    pub fn with_sheet(mut self, path: impl Into<String>, sheet: SpriteSheet) -> Self {
        self.sheets.insert(path.into(), sheet);
        self
    }

    /// Registers a palette under `path`.
    #[must_use]
    pub fn with_palette(mut self, path: impl Into<String>, palette: Palette) -> Self {
        self.palettes.insert(path.into(), palette);
        self
    }

    /// Registers the font for `style`.
    #[must_use]
    pub fn with_font(mut self, style: FontStyle, font: BlockFont) -> Self {
        self.fonts.insert(style, font);
        self
    }
}

impl AssetLoader<PixelSurface> for SoftwareAssets {
    type Animation = DecodedAnimation;
    type Font = BlockFont;

    fn load_animation(&self, path: &str, palette: &str) -> AssetResult<DecodedAnimation> {
        let sheet = self
            .sheets
            .get(path)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))?;
        let colors = self
            .palettes
            .get(palette)
            .ok_or_else(|| AssetError::NotFound(palette.to_string()))?;

        sheet.decode(path, colors)
    }

    fn load_font(&self, style: FontStyle) -> AssetResult<BlockFont> {
        self.fonts
            .get(&style)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(style.to_string()))
    }
}
