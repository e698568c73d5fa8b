//! Core widget types and traits.

use cairn_render::Surface;

use crate::error::UiResult;
use crate::input::{MouseEvent, MouseMoveEvent};

/// Widget state flags (bitfield).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is drawn.
    pub const VISIBLE: u32 = 1 << 0;
    /// Widget accepts input.
    ///
    /// Advisory: the dispatching tree checks it before routing events.
    /// Widgets' own handlers do not.
    pub const ENABLED: u32 = 1 << 1;

    /// Flags of a freshly created widget: enabled, not yet visible.
    pub const DEFAULT: Self = Self(Self::ENABLED);

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }
}

/// State every widget carries: flags and the position layout assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetBase {
    flags: WidgetFlags,
    position: (i32, i32),
}

impl WidgetBase {
    /// Creates an enabled, hidden widget base at the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: WidgetFlags::DEFAULT,
            position: (0, 0),
        }
    }

    /// Returns true if the widget is drawn.
    #[inline]
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Shows or hides the widget.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.assign(WidgetFlags::VISIBLE, visible);
    }

    /// Returns true if the widget accepts input.
    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.flags.has(WidgetFlags::ENABLED)
    }

    /// Enables or disables input.
    ///
    /// Only the dispatcher honours this; calling a handler directly on a
    /// disabled widget still runs it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.assign(WidgetFlags::ENABLED, enabled);
    }

    /// Returns the layout position.
    #[must_use]
    pub const fn position(&self) -> (i32, i32) {
        self.position
    }

    /// Moves the widget.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = (x, y);
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

/// Capabilities the UI tree drives a widget through.
///
/// Input handlers return whether the event should keep propagating to
/// other listeners. The defaults ignore the event and let it through.
pub trait Widget<S: Surface> {
    /// Returns the shared widget state.
    fn base(&self) -> &WidgetBase;

    /// Returns mutable access to the shared widget state.
    fn base_mut(&mut self) -> &mut WidgetBase;

    /// A mouse button went down over the widget.
    fn handle_mouse_down(&mut self, _event: &MouseEvent) -> bool {
        true
    }

    /// A mouse button went up over the widget.
    fn handle_mouse_up(&mut self, _event: &MouseEvent) -> bool {
        true
    }

    /// The pointer left the widget's bounds.
    fn handle_mouse_leave(&mut self, _event: &MouseMoveEvent) -> bool {
        true
    }

    /// Draws the widget onto `target` at its current translation.
    ///
    /// # Errors
    ///
    /// Fails when the widget cannot be drawn.
    fn render(&self, target: &mut S) -> UiResult<()>;

    /// Returns the widget's `(width, height)`.
    fn size(&self) -> (u32, u32);
}
