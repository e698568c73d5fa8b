//! # UI Error Types
//!
//! Every way building or drawing a widget can fail. Construction errors are
//! all fatal to the `create` call that raised them; no partially built
//! widget is ever returned.

use cairn_render::RenderError;
use thiserror::Error;

use crate::assets::AssetError;

/// Errors that can occur in the UI system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// No style is registered under this name.
    #[error("unknown button style: {0}")]
    UnknownStyle(String),

    /// A style table could not be read or failed validation.
    #[error("invalid style configuration: {0}")]
    InvalidConfig(String),

    /// An animation, palette or font could not be loaded.
    #[error("failed to load resource {resource}")]
    ResourceLoad {
        /// Path or font name of the resource.
        resource: String,
        /// Underlying asset failure.
        #[source]
        source: AssetError,
    },

    /// A grid frame's size could not be queried.
    #[error("failed to query size of frame {index}")]
    FrameMetrics {
        /// Frame index that was queried.
        index: usize,
        /// Underlying asset failure.
        #[source]
        source: AssetError,
    },

    /// The animation holds fewer frames than a single visual state needs.
    #[error("animation has {frames} frames, a state needs {segments}")]
    NoVisualStates {
        /// Frames in the animation.
        frames: usize,
        /// Frames per visual state (`segments_x * segments_y`).
        segments: usize,
    },

    /// A state surface could not be allocated.
    #[error("failed to allocate {width}x{height} surface")]
    SurfaceAllocation {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Underlying render failure.
        #[source]
        source: RenderError,
    },

    /// Blitting a grid frame into a state surface failed.
    #[error("failed to composite visual state {state}")]
    Composite {
        /// Visual state index being built.
        state: usize,
        /// Underlying asset failure.
        #[source]
        source: AssetError,
    },

    /// Drawing the label onto a state surface failed.
    #[error("failed to draw label for visual state {state}")]
    TextDraw {
        /// Visual state index being built.
        state: usize,
        /// Underlying asset failure.
        #[source]
        source: AssetError,
    },

    /// The current state has no pre-rendered surface.
    #[error("state {state} has no surface ({surfaces} built)")]
    StateOutOfRange {
        /// Requested state index.
        state: usize,
        /// Number of surfaces the widget holds.
        surfaces: usize,
    },

    /// Blitting onto the render target failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
