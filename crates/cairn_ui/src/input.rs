//! Mouse events delivered to widgets.
//!
//! Hit testing and routing happen upstream; a widget only receives events
//! already meant for it.

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Left mouse button.
    #[default]
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// A mouse button press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseEvent {
    /// Pointer X in screen pixels.
    pub x: i32,
    /// Pointer Y in screen pixels.
    pub y: i32,
    /// Button that changed.
    pub button: MouseButton,
}

impl MouseEvent {
    /// Creates an event for `button` at `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32, button: MouseButton) -> Self {
        Self { x, y, button }
    }
}

/// Pointer movement, including leaving a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseMoveEvent {
    /// Pointer X in screen pixels.
    pub x: i32,
    /// Pointer Y in screen pixels.
    pub y: i32,
}

impl MouseMoveEvent {
    /// Creates a move event at `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
