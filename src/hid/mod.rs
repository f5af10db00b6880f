//! HID side of the bridge: report descriptor model and input report decoding.

pub mod bits;
pub mod boot;
pub mod descriptor;
pub mod keyboard;
pub mod mouse;
pub mod report_map;
pub mod usage;

#[cfg(test)]
mod tests;

pub use bits::{extract_signed, extract_unsigned};
pub use boot::BootDevice;
pub use descriptor::parse;
pub use keyboard::{decode_keyboard, KeyboardState};
pub use mouse::{decode_mouse, MouseState};
pub use report_map::{Application, ReportField, ReportLayout, ReportMap, ReportType};
pub use usage::UsagePage;

use crate::error::DecodeError;

/// Result of decoding one input report.
///
/// Decoding never aborts: a field that runs past the end of the report is
/// skipped and `error` holds the first such failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded<T> {
    pub state: T,
    pub error: Option<DecodeError>,
}

impl<T> Decoded<T> {
    /// Every field was read.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_state(self) -> T {
        self.state
    }
}
