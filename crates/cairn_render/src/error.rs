//! # Render Error Types
//!
//! Failures raised by surfaces and surface factories.

use thiserror::Error;

/// Errors that can occur while allocating or drawing surfaces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Requested surface dimensions cannot be allocated.
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// `pop` was called with no translation pushed.
    #[error("translation stack underflow")]
    TranslationUnderflow,
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
