//! Unified error type for ble2ps2.
//!
//! We avoid heap data in errors - all variants carry only fixed-size
//! values so they stay `Copy` and cheap to log with defmt.

use thiserror::Error;

/// Top-level error type used across the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The device's report descriptor is malformed.
    #[error("report descriptor: {0}")]
    Parse(#[from] ParseError),

    /// An input report is shorter than its layout.
    #[error("input report: {0}")]
    Decode(#[from] DecodeError),

    /// No scan code is defined for a usage.
    #[error("scan code table: {0}")]
    Lookup(#[from] LookupMiss),

    /// The device has no session (never connected, or already gone).
    #[error("device is not connected")]
    UnknownDevice,

    /// The device's descriptor declares no input report with this ID.
    #[error("no input report layout for report id {0}")]
    UnknownReport(u8),

    /// Every session slot is taken.
    #[error("session limit reached")]
    TooManyDevices,
}

/// Malformed report descriptor. Offsets are byte positions of the
/// offending item's prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Item declares more value bytes than remain in the descriptor.
    #[error("item at offset {offset} is truncated")]
    Truncated { offset: usize },

    /// END_COLLECTION with no open collection.
    #[error("END_COLLECTION at offset {offset} closes nothing")]
    CollectionUnderflow { offset: usize },

    /// POP with an empty global-state stack.
    #[error("POP at offset {offset} with nothing pushed")]
    GlobalStackUnderflow { offset: usize },

    /// USAGE_MAXIMUM without a USAGE / USAGE_MINIMUM to start the range.
    #[error("USAGE_MAXIMUM at offset {offset} has no range start")]
    UsageRangeWithoutStart { offset: usize },
}

/// A field could not be read from an input report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// The bit range runs past the end of the report.
    #[error("bits {bit_offset}+{bit_size} exceed a {len}-byte report")]
    OutOfBounds {
        bit_offset: u32,
        bit_size: u32,
        len: usize,
    },

    /// Scalar values are limited to 32 bits.
    #[error("{bit_size}-bit value does not fit in 32 bits")]
    FieldTooWide { bit_size: u32 },
}

/// No mapping exists for a usage in the requested scan code set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("no set {set} scan code for usage {usage:#06x} on page {page:#06x}")]
pub struct LookupMiss {
    pub page: u16,
    pub usage: u16,
    pub set: u8,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
