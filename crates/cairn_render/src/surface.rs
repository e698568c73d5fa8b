//! Surface contract and the scoped translation guard.

use std::ops::{Deref, DerefMut};

use crate::error::RenderResult;

/// Sampling filter used when a surface is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Nearest-neighbor sampling (crisp pixel art).
    #[default]
    Nearest,
    /// Bilinear sampling.
    Linear,
}

/// An owned pixel buffer that can be drawn into and blitted elsewhere.
pub trait Surface {
    /// Returns the surface dimensions in pixels.
    fn size(&self) -> (u32, u32);

    /// Offsets all subsequent draws by `(x, y)` on top of the current offset.
    fn push_translation(&mut self, x: i32, y: i32);

    /// Removes the most recently pushed translation.
    ///
    /// # Errors
    ///
    /// Fails when no translation is pushed.
    fn pop(&mut self) -> RenderResult<()>;

    /// Returns the number of translations currently pushed.
    fn translation_depth(&self) -> usize;

    /// Blits `source` onto this surface at the current translation.
    ///
    /// # Errors
    ///
    /// Implementations fail when the blit cannot be performed.
    fn render(&mut self, source: &Self) -> RenderResult<()>
    where
        Self: Sized;

    /// Pushes a translation that is popped when the returned guard drops.
    fn translate(&mut self, x: i32, y: i32) -> Translation<'_, Self>
    where
        Self: Sized,
    {
        Translation::push(self, x, y)
    }
}

/// Allocates surfaces.
pub trait SurfaceFactory {
    /// Surface type produced by this factory.
    type Surface: Surface;

    /// Allocates a blank `width` x `height` surface.
    ///
    /// # Errors
    ///
    /// Fails when the surface cannot be allocated.
    fn new_surface(&self, width: u32, height: u32, filter: Filter) -> RenderResult<Self::Surface>;
}

/// A pushed translation, popped on drop.
///
/// Derefs to the surface, so draws made through the guard land at the
/// translated position.
pub struct Translation<'a, S: Surface> {
    surface: &'a mut S,
}

impl<'a, S: Surface> Translation<'a, S> {
    /// Pushes `(x, y)` onto `surface` and returns the guard owning the pop.
    pub fn push(surface: &'a mut S, x: i32, y: i32) -> Self {
        surface.push_translation(x, y);
        Self { surface }
    }
}

impl<S: Surface> Deref for Translation<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface> DerefMut for Translation<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface> Drop for Translation<'_, S> {
    fn drop(&mut self) {
        if let Err(err) = self.surface.pop() {
            tracing::warn!(error = %err, "translation guard failed to pop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::software::{PixelSurface, SoftwareRenderer};

    fn surface() -> PixelSurface {
        SoftwareRenderer::new().new_surface(4, 4, Filter::Nearest).unwrap()
    }

    #[test]
    fn test_guard_pops_on_drop() {
        let mut target = surface();
        {
            let guard = target.translate(1, 2);
            assert_eq!(guard.translation_depth(), 1);
            assert_eq!(guard.offset(), (1, 2));
        }
        assert_eq!(target.translation_depth(), 0);
        assert_eq!(target.offset(), (0, 0));
    }

    #[test]
    fn test_guard_pops_on_error_path() {
        fn failing_draw(target: &mut PixelSurface) -> RenderResult<()> {
            let _at = target.translate(3, 3);
            Err(RenderError::InvalidDimensions { width: 0, height: 0 })
        }

        let mut target = surface();
        assert!(failing_draw(&mut target).is_err());
        assert_eq!(target.translation_depth(), 0);
    }

    #[test]
    fn test_nested_guards() {
        let mut target = surface();
        {
            let mut outer = target.translate(1, 1);
            {
                let inner = outer.translate(2, 0);
                assert_eq!(inner.offset(), (3, 1));
            }
            assert_eq!(outer.offset(), (1, 1));
        }
        assert_eq!(target.translation_depth(), 0);
    }
}
