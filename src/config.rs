//! Application configuration constants.
//!
//! Layout positions and timing intervals are computed at compile time as
//! `const`, avoiding per-frame arithmetic. These constants are used throughout
//! the rendering and state machine code instead of recalculating values every
//! frame.

use std::time::Duration;

use embedded_graphics::prelude::Point;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (badge LCD: 160x120)
pub const SCREEN_WIDTH: u32 = 160;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 120;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The host loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// How long a scan runs before the no-hardware fallback "connects" (ms).
pub const SCAN_DURATION_MS: u64 = 3000;

/// Minimum interval between heart-rate refreshes (ms). The simulated reading
/// updates at 2 Hz regardless of frame rate.
pub const HR_REFRESH_MS: u64 = 500;

/// Interval between animated ellipsis steps on the scanning screen (ms).
pub const ELLIPSIS_STEP_MS: u64 = 500;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Title text baseline position.
pub const TITLE_POS: Point = Point::new(10, 10);

/// Idle prompt position (first line; second line is 15px below).
pub const PROMPT_POS: Point = Point::new(10, 50);

/// Scanning status text position.
pub const SCANNING_TEXT_POS: Point = Point::new(10, 50);

/// Scan progress bar top-left corner.
pub const PROGRESS_BAR_POS: Point = Point::new(10, 70);

/// Scan progress bar width when the scan completes.
pub const PROGRESS_BAR_MAX_WIDTH: u32 = 140;

/// Scan progress bar height in pixels.
pub const PROGRESS_BAR_HEIGHT: u32 = 5;

/// Heart icon center position on the connected screen.
pub const HEART_ICON_POS: Point = Point::new(80, 50);

/// Heart icon base radius in pixels (before pulse scaling).
pub const HEART_ICON_SIZE: u32 = 15;

/// BPM readout position (text is centered on this X coordinate).
pub const BPM_TEXT_POS: Point = Point::new(80, 75);

/// "Connected" status line position.
pub const STATUS_POS: Point = Point::new(10, 90);

/// Disconnect hint line position.
pub const HINT_POS: Point = Point::new(10, 105);

/// Vertical spacing between consecutive prompt lines.
pub const LINE_SPACING: i32 = 15;
