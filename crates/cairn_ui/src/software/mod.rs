//! Software asset backend.
//!
//! Palette-indexed sprite sheets, a monospace block font, and an in-memory
//! loader serving both. Everything here renders into
//! [`cairn_render::PixelSurface`].

mod font;
mod loader;
mod palette;
mod sheet;

pub use font::BlockFont;
pub use loader::SoftwareAssets;
pub use palette::Palette;
pub use sheet::{DecodedAnimation, IndexedFrame, SpriteSheet};
