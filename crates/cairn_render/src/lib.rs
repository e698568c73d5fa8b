//! # CAIRN Render
//!
//! The drawing contract CAIRN widgets are written against, plus a software
//! implementation of it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  SURFACE CONTRACT                     │
//! ├──────────────────────────────────────────────────────┤
//! │  SurfaceFactory → Surface ──push_translation──┐      │
//! │                     │                          │      │
//! │                  render(source)  ←── Translation guard│
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! A [`Surface`] is an owned pixel buffer that other surfaces can be
//! blitted onto. Draw calls land at the surface's current translation,
//! which is a stack: every push must be matched by a pop. The
//! [`Translation`] guard pops on drop so that early returns cannot leak an
//! offset into later draws.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod color;
pub mod error;
pub mod software;
pub mod surface;

pub use color::Rgba;
pub use error::{RenderError, RenderResult};
pub use software::{PixelSurface, SoftwareRenderer};
pub use surface::{Filter, Surface, SurfaceFactory, Translation};
