//! # CAIRN UI
//!
//! Sprite-sheet buttons for a game-style interface.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       BUTTON PIPELINE                       │
//! ├────────────────────────────────────────────────────────────┤
//! │  StyleRegistry → Button::create ─────────→ Button runtime  │
//! │       ↓               ↓                        ↓           │
//! │  resolve(name)   load sheet + font       input → state     │
//! │                  composite per state     render(state)     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! A button's sprite sheet is a "segmented animation": every visual state
//! is a `segments_x` × `segments_y` grid of frames, and states are stored
//! one after another. Construction stitches each grid into one surface,
//! bakes the label on top, and keeps the result. At run time a button only
//! picks the surface for its current state and blits it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cairn_render::SoftwareRenderer;
//! use cairn_ui::{Button, StyleRegistry};
//!
//! let styles = StyleRegistry::from_toml_file("data/ui/buttons.toml")?;
//! let mut ok = Button::create("OK", "wide", &styles, &assets, &SoftwareRenderer::new())?;
//! ok.on_mouse_button_down(&event);
//! ok.render(&mut screen)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod assets;
pub mod error;
pub mod input;
pub mod segmented;
pub mod software;
pub mod style;
pub mod widget;

pub use assets::{Animation, AssetError, AssetLoader, AssetResult, Font};
pub use error::{UiError, UiResult};
pub use input::{MouseButton, MouseEvent, MouseMoveEvent};
pub use software::{BlockFont, IndexedFrame, Palette, SoftwareAssets, SpriteSheet};
pub use style::{ButtonStyleConfig, FontStyle, StyleRegistry};
pub use widget::{Button, ButtonState, Widget, WidgetBase};
