//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` are `const fn` constructible in
//! embedded-graphics 0.8, so the compiler computes these once and stores them
//! in the binary's read-only data section. Fonts are compiled in; there is no
//! runtime font loading that could fail mid-frame.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::{CONNECTING, FOREGROUND, HIGHLIGHT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for the BPM readout.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text: title, idle prompt, connected status lines.
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, FOREGROUND);

/// Small amber text for the scanning status line.
pub const SCANNING_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, CONNECTING);

/// Large highlight text for the BPM value (`ProFont` 18pt).
pub const BPM_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, HIGHLIGHT);
