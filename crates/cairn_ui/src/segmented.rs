//! Segmented animations: sprite sheets that tile into visual states.
//!
//! Frames are stored row-major, one `segments_x` × `segments_y` grid per
//! visual state, states back to back:
//!
//! ```text
//! state 0            state 1
//! ┌────┬────┐        ┌────┬────┐
//! │ f0 │ f1 │        │ f4 │ f5 │
//! ├────┼────┤        ├────┼────┤
//! │ f2 │ f3 │        │ f6 │ f7 │
//! └────┴────┘        └────┴────┘
//! ```

use cairn_render::Surface;

use crate::assets::{Animation, AssetResult};
use crate::error::{UiError, UiResult};
use crate::style::ButtonStyleConfig;

/// Converts a pixel length to a signed offset, saturating.
pub(crate) fn to_offset(length: u32) -> i32 {
    i32::try_from(length).unwrap_or(i32::MAX)
}

/// Measures one visual state's footprint.
///
/// Width sums the first `segments_x` frames. Height sums the frames at
/// stride `segments_y` (`0, segments_y, 2 * segments_y, ...`).
///
/// # Errors
///
/// Returns [`UiError::FrameMetrics`] when a frame size query fails.
pub fn grid_size<S, A>(animation: &A, segments_x: usize, segments_y: usize) -> UiResult<(u32, u32)>
where
    S: Surface,
    A: Animation<S>,
{
    let frame_size = |index: usize| {
        animation
            .frame_size(index)
            .map_err(|source| UiError::FrameMetrics { index, source })
    };

    let width = (0..segments_x)
        .map(|index| frame_size(index).map(|(w, _)| w))
        .sum::<UiResult<u32>>()?;
    let height = (0..segments_y)
        .map(|row| frame_size(row * segments_y).map(|(_, h)| h))
        .sum::<UiResult<u32>>()?;

    Ok((width, height))
}

/// Number of visual states `animation` holds under `config`'s grid.
///
/// # Errors
///
/// Returns [`UiError::NoVisualStates`] when not even one grid fits.
pub fn state_count<S, A>(animation: &A, config: &ButtonStyleConfig) -> UiResult<usize>
where
    S: Surface,
    A: Animation<S>,
{
    let frames = animation.frame_count();
    let segments = config.segments_per_state();
    match frames.checked_div(segments) {
        Some(count) if count > 0 => Ok(count),
        _ => Err(UiError::NoVisualStates { frames, segments }),
    }
}

/// Tiles visual state `state` of `animation` onto `target`.
///
/// Cells go left to right, then top to bottom. A cell starts where the
/// previous one in its row ended; a row starts below the tallest frame of
/// the row above.
///
/// # Errors
///
/// Fails if any frame of the state cannot be measured or drawn.
pub fn render_segmented<S, A>(
    animation: &A,
    segments_x: usize,
    segments_y: usize,
    state: usize,
    target: &mut S,
) -> AssetResult<()>
where
    S: Surface,
    A: Animation<S>,
{
    let first = state * segments_x * segments_y;
    let mut y = 0;

    for row in 0..segments_y {
        let mut x = 0;
        let mut row_height = 0;

        for column in 0..segments_x {
            let index = first + row * segments_x + column;
            let (width, height) = animation.frame_size(index)?;

            let mut cell = target.translate(x, y);
            animation.render_frame(index, &mut cell)?;
            drop(cell);

            x += to_offset(width);
            row_height = row_height.max(height);
        }

        y += to_offset(row_height);
    }

    Ok(())
}
