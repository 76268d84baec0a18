//! Heart-rate app state and the scan/connect/monitor state machine.
//!
//! [`AppState`] is a single record owned by the app instance and mutated only
//! through the transition methods here, which keeps the core invariant intact:
//! `is_scanning` and `is_connected` are never simultaneously true, and
//! `heart_rate` is zero whenever the app is not connected.
//!
//! # State Machine
//!
//! ```text
//!            A pressed              scan_duration elapsed
//!   IDLE ───────────────► SCANNING ─────────────────────► CONNECTED
//!    ▲                                                        │
//!    └────────────────────────────────────────────────────────┘
//!                         A pressed
//! ```
//!
//! There is no terminal state; `on_exit` resets to the Idle equivalent from
//! anywhere.
//!
//! # Simulated Readings
//!
//! Without real hardware the BPM is synthesized: a 72 BPM baseline with a ±8
//! sine swing over the tick clock, refreshed at most every
//! [`HR_REFRESH_MS`](crate::config::HR_REFRESH_MS) (2 Hz regardless of frame
//! rate). Values stay within [64, 80].

use heapless::Vec;

use crate::ble::DeviceDescriptor;
use crate::config::{HR_REFRESH_MS, SCAN_DURATION_MS};

/// Maximum peripherals remembered per scan.
const MAX_DEVICES: usize = 8;

/// Simulated BPM baseline.
const SIM_BASE_BPM: f64 = 72.0;

/// Simulated BPM swing amplitude.
const SIM_SWING_BPM: f64 = 8.0;

/// Which of the three mutually exclusive views is active.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Phase {
    /// Not connected, not scanning. Shows the scan prompt.
    #[default]
    Idle,
    /// Scan in progress. Shows the animated ellipsis and progress bar.
    Scanning,
    /// Connected (or simulating a connection). Shows the live BPM.
    Connected,
}

/// Mutable app state, created at init and cleared on exit.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Last computed/simulated BPM; 0 while disconnected.
    pub heart_rate: u16,
    /// True once a scan completes (or a real device connects).
    pub is_connected: bool,
    /// True while a scan is in progress. Mutually exclusive with `is_connected`.
    pub is_scanning: bool,
    /// Tick value when the current scan began. Meaningful only while scanning.
    pub scan_start: u64,
    /// Fixed scan length in ms before the fallback connect.
    pub scan_duration: u64,
    /// Tick value of the last heart-rate refresh.
    pub hr_update_time: u64,
    /// Peripherals discovered during the current scan.
    pub devices_found: Vec<DeviceDescriptor, MAX_DEVICES>,
}

impl AppState {
    /// Fresh state in the Idle phase.
    pub const fn new() -> Self {
        Self {
            heart_rate: 0,
            is_connected: false,
            is_scanning: false,
            scan_start: 0,
            scan_duration: SCAN_DURATION_MS,
            hr_update_time: 0,
            devices_found: Vec::new(),
        }
    }

    /// Derive the active phase from the connection flags.
    pub const fn phase(&self) -> Phase {
        if self.is_connected {
            Phase::Connected
        } else if self.is_scanning {
            Phase::Scanning
        } else {
            Phase::Idle
        }
    }

    /// Begin a scan: record the start tick and forget previous discoveries.
    ///
    /// Callers gate this on the Idle phase; starting a scan while connected or
    /// already scanning is not a supported transition.
    pub fn begin_scan(&mut self, now: u64) {
        self.is_scanning = true;
        self.scan_start = now;
        self.devices_found.clear();
    }

    /// Milliseconds since the current scan began.
    pub const fn scan_elapsed(&self, now: u64) -> u64 { now.saturating_sub(self.scan_start) }

    /// Has the scan run for its full duration?
    pub const fn scan_timed_out(&self, now: u64) -> bool { self.scan_elapsed(now) >= self.scan_duration }

    /// Complete the scan and enter the Connected phase.
    ///
    /// This is the BLE-unavailable fallback: absent real hardware, every scan
    /// "succeeds" once the timeout elapses. Seeding `hr_update_time` with the
    /// transition tick makes the first reading land one refresh interval later.
    pub const fn complete_scan(&mut self, now: u64) {
        self.is_scanning = false;
        self.is_connected = true;
        self.hr_update_time = now;
    }

    /// Drop the connection and clear the reading.
    pub const fn disconnect(&mut self) {
        self.is_connected = false;
        self.heart_rate = 0;
    }

    /// Reset to the Idle equivalent. Used by `on_exit` from any phase.
    pub fn reset(&mut self) {
        self.is_connected = false;
        self.is_scanning = false;
        self.heart_rate = 0;
        self.devices_found.clear();
    }

    /// Record a discovered peripheral. Extra devices beyond the buffer
    /// capacity are dropped.
    pub fn record_device(&mut self, device: DeviceDescriptor) { let _ = self.devices_found.push(device); }

    /// Refresh the simulated BPM if the refresh interval has elapsed.
    ///
    /// Idempotent within the interval: calling again before
    /// `hr_update_time + HR_REFRESH_MS` leaves the state untouched, so the
    /// reading updates at 2 Hz no matter how fast frames arrive.
    pub fn simulate_reading(&mut self, now: u64) {
        if now.saturating_sub(self.hr_update_time) < HR_REFRESH_MS {
            return;
        }
        let variation = (now as f64 / 1000.0).sin() * SIM_SWING_BPM;
        self.heart_rate = (SIM_BASE_BPM + variation).round() as u16;
        self.hr_update_time = now;
    }

    /// Record a BPM parsed from a real measurement payload.
    ///
    /// Only meaningful while connected; readings that arrive in any other
    /// phase are discarded so `heart_rate` stays zero when disconnected.
    pub fn apply_measurement(&mut self, bpm: u16, now: u64) {
        if self.is_connected {
            self.heart_rate = bpm;
            self.hr_update_time = now;
        }
    }
}

impl Default for AppState {
    fn default() -> Self { Self::new() }
}
