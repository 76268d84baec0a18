//! Per-phase screen rendering.
//!
//! Exactly one of these draw functions runs each frame, selected by the
//! current [`Phase`](crate::state::Phase):
//!
//! - [`draw_idle`]: scan prompt
//! - [`draw_scanning`]: animated ellipsis + progress bar
//! - [`draw_connected`]: pulsing heart, BPM readout, disconnect hint

mod connected;
mod idle;
mod scanning;

pub use connected::draw_connected;
pub use idle::draw_idle;
pub use scanning::draw_scanning;
