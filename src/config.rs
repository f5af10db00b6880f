//! Bridge-wide constants and runtime configuration.
//!
//! All timing parameters and protocol defaults live here so they can be
//! tuned in one place.

use embassy_time::Duration;

use crate::ps2::{MouseProtocol, ScanCodeSet};

// PS/2 keyboard

/// Scan code set emitted to the host unless configured otherwise.
/// Set 2 is what every AT/PS2 host expects after power-on.
pub const DEFAULT_SCAN_CODE_SET: ScanCodeSet = ScanCodeSet::Set2;

// PS/2 mouse

/// Minimum spacing between two PS/2 mouse packets (ms).
/// 17 ms ≈ 60 packets/s, within what a 10-12 kHz PS/2 clock can drain.
pub const MOUSE_MIN_EMIT_INTERVAL_MS: u64 = 17;

/// Number of decoded mouse reports buffered before a forced emission.
pub const MOUSE_BUFFER_CAPACITY: usize = 10;

/// Most PS/2 packets one coalesced report is split into. Motion beyond
/// what this many packets can carry is dropped.
/// 4 packets of 3-4 bytes fit within one emit interval on the wire.
pub const MAX_SPLIT_PACKETS: usize = 4;

/// Packet format negotiated with the host.
pub const DEFAULT_MOUSE_PROTOCOL: MouseProtocol = MouseProtocol::Standard;

// Sessions

/// Maximum number of BLE peripherals bridged at once.
pub const MAX_DEVICES: usize = 4;

/// Runtime configuration for a [`Bridge`](crate::bridge::Bridge).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BridgeConfig {
    /// Scan code set used for every keyboard session.
    pub scan_code_set: ScanCodeSet,
    /// Rate limit for coalesced mouse reports.
    pub mouse_min_interval: Duration,
    /// PS/2 mouse packet format.
    pub mouse_protocol: MouseProtocol,
    /// Session limit.
    pub max_devices: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            scan_code_set: DEFAULT_SCAN_CODE_SET,
            mouse_min_interval: Duration::from_millis(MOUSE_MIN_EMIT_INTERVAL_MS),
            mouse_protocol: DEFAULT_MOUSE_PROTOCOL,
            max_devices: MAX_DEVICES,
        }
    }
}
