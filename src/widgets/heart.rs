//! Pulsing heart icon.
//!
//! The heart is approximated with two overlapping filled circles for the lobes
//! and a downward triangle for the point. The whole shape scales with the
//! `pulse` parameter so the icon visibly "beats" when driven by a sine wave.
//!
//! ```text
//!    ◯ ◯      two circles, centers offset left/right and up
//!   ▼         triangle filling the lower point
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Triangle};

use crate::colors::HIGHLIGHT;

/// Fraction of extra scale applied at full pulse.
const PULSE_SCALE: f32 = 0.3;

/// Draw the heart icon centered at (`x`, `y`).
///
/// # Parameters
/// - `x`, `y`: Icon center point
/// - `size`: Base lobe radius in pixels (before pulse scaling)
/// - `pulse`: Beat phase in `[0.0, 1.0]`; 0 = resting size, 1 = fully swollen
pub fn draw_heart_icon<D>(display: &mut D, x: i32, y: i32, size: u32, pulse: f32)
where
    D: DrawTarget<Color = Rgb565>,
{
    let scale = pulse.clamp(0.0, 1.0).mul_add(PULSE_SCALE, 1.0);
    let r = ((size as f32 * scale) as i32).max(1);
    let ox = r / 2;
    let style = PrimitiveStyle::with_fill(HIGHLIGHT);

    // Lobes: two circles offset up and to each side
    let diameter = (r * 2) as u32;
    Circle::with_center(Point::new(x - ox, y - ox), diameter)
        .into_styled(style)
        .draw(display)
        .ok();
    Circle::with_center(Point::new(x + ox, y - ox), diameter)
        .into_styled(style)
        .draw(display)
        .ok();

    // Lower point: triangle spanning the lobes, apex below
    Triangle::new(
        Point::new(x - r - ox, y),
        Point::new(x + r + ox, y),
        Point::new(x, y + r + ox),
    )
    .into_styled(style)
    .draw(display)
    .ok();
}
