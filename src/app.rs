//! The heart-rate monitor app: lifecycle hooks and the per-frame update.
//!
//! The host owns the loop; it calls [`HeartRateApp::init`] once,
//! [`HeartRateApp::update`] every frame with the newly-pressed buttons and the
//! current millisecond tick, and [`HeartRateApp::on_exit`] when the app is
//! unloaded. `update` returning `false` asks the host to terminate the app.
//!
//! # Frame Contract
//!
//! Each update, in order:
//!
//! 1. Clear the display to the background color.
//! 2. Handle input: A starts a scan (when idle) or disconnects (when
//!    connected); Home returns `false` immediately with nothing further drawn.
//! 3. Draw the static title.
//! 4. Drain backend events (discoveries, measurements).
//! 5. Apply the scan-timeout fallback: with no hardware a scan "connects"
//!    after the fixed duration.
//! 6. Render exactly one phase view and refresh the simulated reading while
//!    connected.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::ble::{BleBackend, BleEvent, NoopBle, parse_heart_rate};
use crate::colors::BACKGROUND;
use crate::config::TITLE_POS;
use crate::input::{Button, FrameInput};
use crate::screens::{draw_connected, draw_idle, draw_scanning};
use crate::state::{AppState, Phase};
use crate::styles::LABEL_STYLE;

/// Title shown on every screen.
const TITLE: &str = "Heart Rate Monitor";

/// Single-screen heart-rate monitor app.
///
/// Owns its state exclusively; the host never mutates it. Generic over the
/// BLE backend so real hardware is a drop-in swap for the default inert stub.
pub struct HeartRateApp<B: BleBackend = NoopBle> {
    state: AppState,
    backend: B,
}

impl HeartRateApp<NoopBle> {
    /// App with the inert backend: scans fall back to the simulated connect.
    pub const fn new() -> Self { Self::with_backend(NoopBle) }
}

impl<B: BleBackend> HeartRateApp<B> {
    /// App driven by a specific BLE backend.
    pub const fn with_backend(backend: B) -> Self {
        Self {
            state: AppState::new(),
            backend,
        }
    }

    /// Read-only view of the app state, for the host and tests.
    pub const fn state(&self) -> &AppState { &self.state }

    /// Host lifecycle: called once before the first frame. State is already
    /// pre-populated with defaults, so nothing to do.
    pub fn init(&mut self) {}

    /// Host lifecycle: called once per frame.
    ///
    /// Returns `false` to ask the host to unload the app.
    pub fn update<D>(&mut self, display: &mut D, input: &FrameInput, now: u64) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(BACKGROUND).ok();

        if input.pressed(Button::A) {
            match self.state.phase() {
                Phase::Idle => self.state.begin_scan(now),
                Phase::Connected => self.state.disconnect(),
                // A press during a scan neither cancels nor restarts it
                Phase::Scanning => {}
            }
        }
        if input.pressed(Button::Home) {
            return false;
        }

        Text::new(TITLE, TITLE_POS, LABEL_STYLE).draw(display).ok();

        self.drain_ble_events(now);

        // No-hardware fallback: the scan "succeeds" once the timeout elapses.
        // A real backend would instead connect from a discovered device.
        if self.state.is_scanning && self.state.scan_timed_out(now) {
            self.state.complete_scan(now);
        }

        match self.state.phase() {
            Phase::Connected => {
                self.state.simulate_reading(now);
                draw_connected(display, &self.state, now);
            }
            Phase::Scanning => draw_scanning(display, &self.state, now),
            Phase::Idle => draw_idle(display),
        }

        true
    }

    /// Host lifecycle: called once when the app is unloaded. May arrive in any
    /// phase; leaves the state Idle-equivalent with cleared readings.
    pub fn on_exit(&mut self) { self.state.reset(); }

    /// Forward pending backend events into the state record.
    ///
    /// Malformed measurement payloads are skipped, not fatal: the reading
    /// simply keeps its previous value until a parseable payload arrives.
    fn drain_ble_events(&mut self, now: u64) {
        while let Some(event) = self.backend.poll_event() {
            match event {
                BleEvent::DeviceFound(device) => {
                    if self.state.is_scanning {
                        self.state.record_device(device);
                    }
                }
                BleEvent::Measurement(payload) => {
                    if let Some(bpm) = parse_heart_rate(&payload) {
                        self.state.apply_measurement(bpm, now);
                    }
                }
            }
        }
    }
}

impl Default for HeartRateApp<NoopBle> {
    fn default() -> Self { Self::new() }
}
