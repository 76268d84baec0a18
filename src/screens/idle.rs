//! Idle screen: prompt the user to start a scan.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::config::{LINE_SPACING, PROMPT_POS};
use crate::styles::LABEL_STYLE;

/// Draw the two-line scan prompt.
pub fn draw_idle<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::new("Press A to scan", PROMPT_POS, LABEL_STYLE).draw(display).ok();
    Text::new(
        "for BLE device",
        Point::new(PROMPT_POS.x, PROMPT_POS.y + LINE_SPACING),
        LABEL_STYLE,
    )
    .draw(display)
    .ok();
}
