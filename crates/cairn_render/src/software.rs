//! Software surfaces backed by an RGBA8 pixel buffer.
//!
//! Blits are clipped to the destination bounds. Opaque source pixels
//! replace the destination, transparent ones are skipped, anything in
//! between is alpha-blended.

use image::{Pixel, RgbaImage};

use crate::color::Rgba;
use crate::error::{RenderError, RenderResult};
use crate::surface::{Filter, Surface, SurfaceFactory};

/// A CPU pixel surface.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    image: RgbaImage,
    filter: Filter,
    translations: Vec<(i32, i32)>,
    offset: (i32, i32),
}

impl PixelSurface {
    /// Wraps an existing image.
    #[must_use]
    pub fn from_image(image: RgbaImage, filter: Filter) -> Self {
        Self {
            image,
            filter,
            translations: Vec::new(),
            offset: (0, 0),
        }
    }

    /// Returns the sampling filter this surface was created with.
    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Returns the accumulated translation.
    #[must_use]
    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    /// Returns the pixel at `(x, y)`, ignoring translation.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.image.width() && y < self.image.height() {
            Some((*self.image.get_pixel(x, y)).into())
        } else {
            None
        }
    }

    /// Returns all pixels in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        bytemuck::cast_slice(self.image.as_raw())
    }

    /// Returns the backing image.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Fills a rectangle at the current translation.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        for dy in 0..height {
            for dx in 0..width {
                let px = i64::from(x) + i64::from(dx);
                let py = i64::from(y) + i64::from(dy);
                self.put(px, py, color);
            }
        }
    }

    /// Writes one pixel at translated coordinates, clipping to bounds.
    fn put(&mut self, x: i64, y: i64, color: Rgba) {
        if color.is_transparent() {
            return;
        }

        let x = x + i64::from(self.offset.0);
        let y = y + i64::from(self.offset.1);
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x >= self.image.width() || y >= self.image.height() {
            return;
        }

        let opaque = color.is_opaque();
        let color: image::Rgba<u8> = color.into();
        let dest = self.image.get_pixel_mut(x, y);
        if opaque {
            *dest = color;
        } else {
            dest.blend(&color);
        }
    }
}

impl Surface for PixelSurface {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn push_translation(&mut self, x: i32, y: i32) {
        self.translations.push((x, y));
        self.offset = (self.offset.0 + x, self.offset.1 + y);
    }

    fn pop(&mut self) -> RenderResult<()> {
        let (x, y) = self.translations.pop().ok_or(RenderError::TranslationUnderflow)?;
        self.offset = (self.offset.0 - x, self.offset.1 - y);
        Ok(())
    }

    fn translation_depth(&self) -> usize {
        self.translations.len()
    }

    fn render(&mut self, source: &Self) -> RenderResult<()> {
        for (x, y, pixel) in source.image.enumerate_pixels() {
            self.put(i64::from(x), i64::from(y), (*pixel).into());
        }
        Ok(())
    }
}

/// Allocates [`PixelSurface`]s.
#[derive(Debug, Clone, Copy)]
pub struct SoftwareRenderer {
    max_dimension: u32,
}

impl SoftwareRenderer {
    /// Largest edge length accepted by default.
    pub const DEFAULT_MAX_DIMENSION: u32 = 8192;

    /// Creates a renderer with the default size limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_dimension: Self::DEFAULT_MAX_DIMENSION,
        }
    }

    /// Creates a renderer that refuses surfaces wider or taller than `max_dimension`.
    #[must_use]
    pub const fn with_max_dimension(max_dimension: u32) -> Self {
        Self { max_dimension }
    }
}

impl Default for SoftwareRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceFactory for SoftwareRenderer {
    type Surface = PixelSurface;

    fn new_surface(&self, width: u32, height: u32, filter: Filter) -> RenderResult<PixelSurface> {
        if width == 0 || height == 0 || width > self.max_dimension || height > self.max_dimension {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(PixelSurface::from_image(RgbaImage::new(width, height), filter))
    }
}
