//! BLE heart-rate contracts: GATT identifiers, measurement parsing, and the
//! backend seam.
//!
//! No real Bluetooth traffic happens in this crate. The state machine only
//! depends on the [`BleBackend`] trait, so a real adapter (scanning for the
//! Heart Rate service and subscribing to its measurement characteristic) can be
//! dropped in without touching the app logic. The default [`NoopBle`] backend
//! reports Bluetooth as unavailable and yields no events, which puts the app in
//! its simulation fallback: a scan always "succeeds" after the fixed timeout
//! and readings are synthesized.
//!
//! # Heart Rate Measurement Encoding
//!
//! Per the Bluetooth SIG Heart Rate Measurement characteristic (0x2a37):
//! byte 0 is a flags field. Flag bit 0 selects the value format:
//!
//! ```text
//! bit 0 = 0:  [flags] [bpm: u8]
//! bit 0 = 1:  [flags] [bpm: u16 little-endian]
//! ```
//!
//! The remaining flag bits (sensor contact, energy expended, RR intervals) are
//! ignored. This encoding must be preserved bit-exactly for real device
//! integration.

use heapless::Vec;

/// GATT Heart Rate service UUID (16-bit form).
pub const HEART_RATE_SERVICE: u16 = 0x180d;

/// GATT Heart Rate Measurement characteristic UUID (16-bit form).
pub const HEART_RATE_MEASUREMENT: u16 = 0x2a37;

/// Flags bit 0: heart-rate value is a 16-bit little-endian quantity.
const FLAG_RATE_U16: u8 = 1 << 0;

/// Maximum measurement payload carried in a [`BleEvent`].
/// Flags + u16 rate + energy expended + two RR intervals fits in 8 bytes.
const MAX_PAYLOAD: usize = 8;

/// Parse a BPM value from a Heart Rate Measurement payload.
///
/// Returns `None` when the payload is too short for the format selected by the
/// flags byte. Callers skip the update on `None` rather than failing the frame.
pub fn parse_heart_rate(data: &[u8]) -> Option<u16> {
    let flags = *data.first()?;
    if flags & FLAG_RATE_U16 == 0 {
        data.get(1).copied().map(u16::from)
    } else {
        let bytes: [u8; 2] = data.get(1..3)?.try_into().ok()?;
        Some(u16::from_le_bytes(bytes))
    }
}

/// A peripheral seen during discovery.
///
/// Collected into `AppState::devices_found` and cleared on each new scan; the
/// current app never selects among devices (the fallback connect path ignores
/// them), but a real backend reports discoveries through this type.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DeviceDescriptor {
    /// 48-bit public/random device address.
    pub address: [u8; 6],
    /// Received signal strength in dBm.
    pub rssi: i8,
}

/// Event reported by a BLE backend during its per-frame poll.
#[derive(Clone, Debug)]
pub enum BleEvent {
    /// A peripheral advertising the Heart Rate service was discovered.
    DeviceFound(DeviceDescriptor),
    /// Raw Heart Rate Measurement characteristic payload.
    Measurement(Vec<u8, MAX_PAYLOAD>),
}

/// Seam between the state machine and a Bluetooth stack.
///
/// Capability is probed once at startup via [`available`](Self::available)
/// rather than sensed through side effects; when it reports `false` the app
/// degrades silently to simulated readings.
pub trait BleBackend {
    /// Whether real Bluetooth hardware is usable.
    fn available(&self) -> bool { false }

    /// Drain one pending event, if any. Called every frame; must not block.
    fn poll_event(&mut self) -> Option<BleEvent> { None }
}

/// Backend used when no Bluetooth stack is present. Never yields events.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoopBle;

impl BleBackend for NoopBle {}
