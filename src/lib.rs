//! BLE HID to PS/2 bridge core.
//!
//! Interprets the HID Report Descriptor of each connected BLE keyboard or
//! mouse, decodes its input reports, and turns them into PS/2 scan codes
//! and mouse packets.
//!
//! ```text
//! Report Map ──▶ hid::descriptor ──▶ ReportMap (per device)
//!                                        │
//! notification ──▶ hid::{keyboard,mouse} decode
//!                        │
//!        ps2::KeyboardTranslator / ps2::MouseCoalescer ──▶ Ps2Sink
//! ```
//!
//! Everything here is pure logic and runs on the host with `cargo test`.
//! BLE transport and the PS/2 line driver live outside this crate, behind
//! [`bridge::BridgeEvent`] and [`bridge::Ps2Sink`].

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Must come first so the logging macros are visible in every module.
#[macro_use]
mod fmt;

pub mod bridge;
pub mod config;
pub mod error;
pub mod hid;
pub mod ps2;
pub mod session;

pub use bridge::{Bridge, BridgeEvent, Ps2Sink};
pub use config::BridgeConfig;
pub use error::{DecodeError, Error, LookupMiss, ParseError, Result};
pub use session::{DeviceId, Dispatch};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
