//! Horizontal progress bar for the scanning screen.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::colors::HIGHLIGHT;

/// Draw a filled progress bar.
///
/// The filled width is `max_width * fraction` with `fraction` clamped to
/// `[0.0, 1.0]`. A zero-width bar draws nothing.
///
/// # Parameters
/// - `top_left`: Bar position
/// - `max_width`: Width at 100% progress
/// - `height`: Bar height in pixels
/// - `fraction`: Completed portion of the work
pub fn draw_progress_bar<D>(display: &mut D, top_left: Point, max_width: u32, height: u32, fraction: f32)
where
    D: DrawTarget<Color = Rgb565>,
{
    let width = (max_width as f32 * fraction.clamp(0.0, 1.0)) as u32;
    if width == 0 {
        return;
    }
    Rectangle::new(top_left, Size::new(width, height))
        .into_styled(PrimitiveStyle::with_fill(HIGHLIGHT))
        .draw(display)
        .ok();
}
