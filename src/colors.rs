//! Color constants for the heart-rate monitor screen.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! The palette below is the badge theme converted from RGB888: each channel is
//! scaled down to its 5/6-bit range (`r * 31 / 255`, `g * 63 / 255`,
//! `b * 31 / 255`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Screen background, dark navy (RGB888 20/20/40).
pub const BACKGROUND: Rgb565 = Rgb565::new(2, 5, 5);

/// Default text color (white). Title, prompts, status lines.
pub const FOREGROUND: Rgb565 = Rgb565::WHITE;

/// Accent color, soft red (RGB888 255/100/100). Heart icon, BPM value,
/// scan progress bar.
pub const HIGHLIGHT: Rgb565 = Rgb565::new(31, 25, 12);

/// Scanning state color, amber (RGB888 255/200/0).
pub const CONNECTING: Rgb565 = Rgb565::new(31, 49, 0);
