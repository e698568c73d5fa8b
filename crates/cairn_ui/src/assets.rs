//! Asset contract: animations and fonts as widgets consume them.
//!
//! Loading and decoding live behind [`AssetLoader`]; widgets only see frame
//! metrics, text metrics and draw calls. [`crate::software`] provides a CPU
//! implementation.

use cairn_render::{RenderError, Rgba, Surface};
use thiserror::Error;

use crate::style::FontStyle;

/// Errors raised by asset loaders, animations and fonts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// No asset is registered under this path or name.
    #[error("asset not found: {0}")]
    NotFound(String),

    /// The asset exists but its data is malformed.
    #[error("failed to decode {path}: {reason}")]
    Decode {
        /// Asset path.
        path: String,
        /// What was wrong with the data.
        reason: String,
    },

    /// A frame index past the end of the animation.
    #[error("frame {index} out of range ({count} frames)")]
    FrameOutOfRange {
        /// Requested frame.
        index: usize,
        /// Frames available.
        count: usize,
    },

    /// The font has no glyph for this character.
    #[error("unsupported glyph {0:?}")]
    UnsupportedGlyph(char),

    /// Drawing onto the target surface failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

/// A decoded multi-frame animation.
pub trait Animation<S: Surface> {
    /// Total number of frames.
    fn frame_count(&self) -> usize;

    /// Returns the `(width, height)` of a frame.
    ///
    /// # Errors
    ///
    /// Fails for indices past [`Animation::frame_count`].
    fn frame_size(&self, index: usize) -> AssetResult<(u32, u32)>;

    /// Draws a frame onto `target` at its current translation.
    ///
    /// # Errors
    ///
    /// Fails for bad indices or when the draw itself fails.
    fn render_frame(&self, index: usize, target: &mut S) -> AssetResult<()>;
}

/// A font able to measure and draw single-line text.
pub trait Font<S: Surface> {
    /// Returns the `(width, height)` bounding box of `text`.
    fn text_metrics(&self, text: &str) -> (u32, u32);

    /// Sets the color used by subsequent draws.
    fn set_color(&mut self, color: Rgba);

    /// Draws `text` with its top-left corner at `target`'s current translation.
    ///
    /// # Errors
    ///
    /// Fails when a glyph cannot be drawn.
    fn render_text(&self, text: &str, target: &mut S) -> AssetResult<()>;
}

/// Loads animations and fonts.
pub trait AssetLoader<S: Surface> {
    /// Animation type produced by this loader.
    type Animation: Animation<S>;
    /// Font type produced by this loader.
    type Font: Font<S>;

    /// Loads an animation, decoding its frames with `palette`.
    ///
    /// # Errors
    ///
    /// Fails when either resource is missing or malformed.
    fn load_animation(&self, path: &str, palette: &str) -> AssetResult<Self::Animation>;

    /// Loads the font for `style`.
    ///
    /// # Errors
    ///
    /// Fails when the font is unavailable.
    fn load_font(&self, style: FontStyle) -> AssetResult<Self::Font>;
}
