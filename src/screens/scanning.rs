//! Scanning screen: animated "Scanning..." text and a progress bar.
//!
//! The ellipsis cycles through 1-4 dots, stepping every
//! [`ELLIPSIS_STEP_MS`](crate::config::ELLIPSIS_STEP_MS). The bar fills
//! linearly over the scan duration; the timeout check in the app caps the
//! fraction at 1.0 before it could overshoot.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::{
    ELLIPSIS_STEP_MS, PROGRESS_BAR_HEIGHT, PROGRESS_BAR_MAX_WIDTH, PROGRESS_BAR_POS, SCANNING_TEXT_POS,
};
use crate::state::AppState;
use crate::styles::SCANNING_STYLE;
use crate::widgets::draw_progress_bar;

/// Draw the scanning status line and progress bar.
pub fn draw_scanning<D>(display: &mut D, state: &AppState, now: u64)
where
    D: DrawTarget<Color = Rgb565>,
{
    let elapsed = state.scan_elapsed(now);

    // "Scanning" plus 1-4 animated dots
    let dots = (elapsed / ELLIPSIS_STEP_MS % 4) + 1;
    let mut text: String<12> = String::new();
    let _ = write!(text, "Scanning");
    for _ in 0..dots {
        let _ = text.push('.');
    }
    Text::new(&text, SCANNING_TEXT_POS, SCANNING_STYLE).draw(display).ok();

    let fraction = elapsed as f32 / state.scan_duration as f32;
    draw_progress_bar(display, PROGRESS_BAR_POS, PROGRESS_BAR_MAX_WIDTH, PROGRESS_BAR_HEIGHT, fraction);
}
