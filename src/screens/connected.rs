//! Connected screen: pulsing heart icon, BPM readout, and disconnect hint.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::{BPM_TEXT_POS, HEART_ICON_POS, HEART_ICON_SIZE, HINT_POS, STATUS_POS};
use crate::state::AppState;
use crate::styles::{BPM_STYLE, CENTERED, LABEL_STYLE};
use crate::widgets::draw_heart_icon;

/// Heartbeat animation period divisor: pulse phase is `|sin(now / 300)|`.
const PULSE_PERIOD_DIVISOR: f64 = 300.0;

/// Draw the live heart-rate view.
pub fn draw_connected<D>(display: &mut D, state: &AppState, now: u64)
where
    D: DrawTarget<Color = Rgb565>,
{
    // Heartbeat: icon swells and shrinks with a rectified sine
    let pulse = (now as f64 / PULSE_PERIOD_DIVISOR).sin().abs() as f32;
    draw_heart_icon(display, HEART_ICON_POS.x, HEART_ICON_POS.y, HEART_ICON_SIZE, pulse);

    // BPM readout, centered under the icon
    let mut bpm_text: String<12> = String::new();
    let _ = write!(bpm_text, "{} BPM", state.heart_rate);
    Text::with_text_style(&bpm_text, BPM_TEXT_POS, BPM_STYLE, CENTERED)
        .draw(display)
        .ok();

    Text::new("Connected", STATUS_POS, LABEL_STYLE).draw(display).ok();
    Text::new("Press A: disconnect", HINT_POS, LABEL_STYLE).draw(display).ok();
}
