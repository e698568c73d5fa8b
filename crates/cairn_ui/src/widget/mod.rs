//! Widget system for UI components.
//!
//! Widgets expose a fixed capability set; the UI tree dispatches input and
//! render calls through [`Widget`] without knowing concrete types.

mod button;
mod core;

pub use self::button::{Button, ButtonState};
pub use self::core::{Widget, WidgetBase, WidgetFlags};
