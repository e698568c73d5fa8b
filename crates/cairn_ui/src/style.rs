//! Button styles.
//!
//! A style names everything a button needs to build itself: which sprite
//! sheet and palette to load, how the sheet's frames tile into one visual
//! state, and which font draws the label. Styles live in an immutable
//! [`StyleRegistry`] built once at startup, either from the built-in table
//! or from a TOML file:
//!
//! ```toml
//! [styles.wide]
//! animation = "/data/global/ui/FrontEnd/WideButtonBlank.dc6"
//! palette = "/data/global/palette/units/pal.dat"
//! segments_x = 2
//! segments_y = 1
//! font = "exocet10"
//! text_offset = 1
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};

/// Palette shared by the built-in front-end buttons.
pub const PALETTE_UNITS: &str = "/data/global/palette/units/pal.dat";

/// Font used to draw a button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    /// 8px in-game font.
    Font8,
    /// 16px in-game font.
    Font16,
    /// 30px in-game font.
    Font30,
    /// 42px in-game font.
    Font42,
    /// 10px formal font.
    Formal10,
    /// 11px formal font.
    Formal11,
    /// 12px formal font.
    Formal12,
    /// 10px Exocet (front-end buttons).
    Exocet10,
    /// Condensed font for small buttons.
    Ridiculous,
}

impl FontStyle {
    /// Returns the identifier used in style files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Font8 => "font8",
            Self::Font16 => "font16",
            Self::Font30 => "font30",
            Self::Font42 => "font42",
            Self::Formal10 => "formal10",
            Self::Formal11 => "formal11",
            Self::Formal12 => "formal12",
            Self::Exocet10 => "exocet10",
            Self::Ridiculous => "ridiculous",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const fn one() -> usize {
    1
}

fn default_palette() -> String {
    PALETTE_UNITS.to_string()
}

/// Fixed configuration for one button style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStyleConfig {
    /// Sprite sheet resource path.
    pub animation: String,
    /// Palette resource path.
    #[serde(default = "default_palette")]
    pub palette: String,
    /// Grid columns per visual state.
    #[serde(default = "one")]
    pub segments_x: usize,
    /// Grid rows per visual state.
    #[serde(default = "one")]
    pub segments_y: usize,
    /// Label font.
    pub font: FontStyle,
    /// Vertical label offset in pixels, added after centering.
    #[serde(default)]
    pub text_offset: i32,
}

impl ButtonStyleConfig {
    /// Largest vertical label offset, in either direction, a style may carry.
    pub const MAX_TEXT_OFFSET: i32 = 4096;

    /// Creates a 1×1 style with the default palette and no text offset.
    #[must_use]
    pub fn new(animation: impl Into<String>, font: FontStyle) -> Self {
        Self {
            animation: animation.into(),
            palette: default_palette(),
            segments_x: 1,
            segments_y: 1,
            font,
            text_offset: 0,
        }
    }

    /// Sets the palette path.
    #[must_use]
    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Sets the grid dimensions.
    #[must_use]
    pub fn with_segments(mut self, segments_x: usize, segments_y: usize) -> Self {
        self.segments_x = segments_x;
        self.segments_y = segments_y;
        self
    }

    /// Sets the vertical label offset.
    #[must_use]
    pub fn with_text_offset(mut self, text_offset: i32) -> Self {
        self.text_offset = text_offset;
        self
    }

    /// Frames making up one visual state.
    #[must_use]
    pub fn segments_per_state(&self) -> usize {
        self.segments_x * self.segments_y
    }

    /// Checks the config can drive construction.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] for empty paths, a zero grid or a
    /// text offset beyond [`ButtonStyleConfig::MAX_TEXT_OFFSET`].
    pub fn validate(&self, name: &str) -> UiResult<()> {
        if self.animation.is_empty() {
            return Err(UiError::InvalidConfig(format!("style {name}: empty animation path")));
        }
        if self.segments_x == 0 || self.segments_y == 0 {
            return Err(UiError::InvalidConfig(format!(
                "style {name}: grid {}x{} has no segments",
                self.segments_x, self.segments_y
            )));
        }
        if self.text_offset.unsigned_abs() > Self::MAX_TEXT_OFFSET.unsigned_abs() {
            return Err(UiError::InvalidConfig(format!(
                "style {name}: text offset {} exceeds ±{}",
                self.text_offset,
                Self::MAX_TEXT_OFFSET
            )));
        }
        Ok(())
    }
}

/// Built-in front-end styles: (name, sheet, segments x, font, text offset).
const BUILTIN: [(&str, &str, usize, FontStyle, i32); 6] = [
    ("medium", "/data/global/ui/FrontEnd/MediumButtonBlank.dc6", 1, FontStyle::Exocet10, 0),
    ("narrow", "/data/global/ui/FrontEnd/NarrowButtonBlank.dc6", 1, FontStyle::Exocet10, 0),
    ("ok_cancel", "/data/global/ui/FrontEnd/CancelButtonBlank.dc6", 1, FontStyle::Ridiculous, 0),
    ("short", "/data/global/ui/FrontEnd/ShortButtonBlank.dc6", 1, FontStyle::Ridiculous, -1),
    ("tall", "/data/global/ui/FrontEnd/TallButtonBlank.dc6", 1, FontStyle::Exocet10, 5),
    ("wide", "/data/global/ui/FrontEnd/WideButtonBlank.dc6", 2, FontStyle::Exocet10, 1),
];

#[derive(Deserialize)]
struct StyleTable {
    #[serde(default)]
    styles: HashMap<String, ButtonStyleConfig>,
}

/// Immutable name → style mapping.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, ButtonStyleConfig>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in front-end styles.
    #[must_use]
    pub fn builtin() -> Self {
        let styles = BUILTIN
            .iter()
            .map(|&(name, animation, segments_x, font, text_offset)| {
                let config = ButtonStyleConfig::new(animation, font)
                    .with_segments(segments_x, 1)
                    .with_text_offset(text_offset);
                (name.to_string(), config)
            })
            .collect();
        Self { styles }
    }

    /// Parses a `[styles.<name>]` TOML table.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] for malformed TOML or invalid styles.
    pub fn from_toml_str(source: &str) -> UiResult<Self> {
        let table: StyleTable =
            toml::from_str(source).map_err(|err| UiError::InvalidConfig(err.to_string()))?;

        for (name, config) in &table.styles {
            config.validate(name)?;
        }
        tracing::debug!(styles = table.styles.len(), "loaded button style table");

        Ok(Self { styles: table.styles })
    }

    /// Reads and parses a TOML style file.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] when the file cannot be read or parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|err| UiError::InvalidConfig(format!("{}: {err}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Adds or replaces a style.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] if `config` fails validation.
    pub fn with_style(mut self, name: impl Into<String>, config: ButtonStyleConfig) -> UiResult<Self> {
        let name = name.into();
        config.validate(&name)?;
        self.styles.insert(name, config);
        Ok(self)
    }

    /// Returns the configuration for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::UnknownStyle`] for unregistered names.
    pub fn resolve(&self, name: &str) -> UiResult<&ButtonStyleConfig> {
        self.styles
            .get(name)
            .ok_or_else(|| UiError::UnknownStyle(name.to_string()))
    }

    /// Returns all style names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns true if no styles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
