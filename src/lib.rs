//! Heart-rate monitor app for a badge-style device.
//!
//! A single-screen UI driven by a host-owned frame loop: press A to scan for a
//! BLE heart-rate monitor, watch the animated scan progress, then see a live
//! BPM readout with a pulsing heart icon. Without Bluetooth hardware the scan
//! falls back to a simulated connection after a fixed timeout and the reading
//! is synthesized, so the whole UI works anywhere.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ host loop (main.rs / device runtime) │  events + ticks + display
//! └──────────────┬───────────────────────┘
//!                │ init / update / on_exit
//! ┌──────────────▼───────────────────────┐
//! │ app::HeartRateApp                    │  frame contract
//! │   state::AppState  (state machine)   │  idle → scanning → connected
//! │   screens::*       (one per phase)   │
//! │   widgets::*       (heart, progress) │
//! │   ble::BleBackend  (hardware seam)   │
//! └──────────────────────────────────────┘
//! ```
//!
//! The app core is generic over `DrawTarget<Color = Rgb565>`, so the same code
//! runs against the desktop simulator and an embedded panel.

pub mod app;
pub mod ble;
pub mod colors;
pub mod config;
pub mod input;
pub mod screens;
pub mod state;
pub mod styles;
pub mod widgets;

pub use app::HeartRateApp;
pub use input::{Button, FrameInput};
pub use state::{AppState, Phase};
