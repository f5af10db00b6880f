//! PS/2 side of the bridge: scan codes, key sequencing and mouse packets.

pub mod keyboard;
pub mod mouse;
pub mod packet;
pub mod scancode;
mod table;

pub use keyboard::{KeyEvent, KeyboardTranslator, Translation};
pub use mouse::MouseCoalescer;
pub use packet::Ps2MouseReport;
pub use scancode::lookup;

/// PS/2 keyboard scan code set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ScanCodeSet {
    /// XT set, used by hosts with translation disabled.
    Set1 = 1,
    /// AT set, the power-on default.
    Set2 = 2,
}

impl ScanCodeSet {
    pub fn number(self) -> u8 {
        self as u8
    }
}

/// Key press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyTransition {
    Make,
    Break,
}

/// Bytes sent to the host for one key transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanCode {
    /// The transition sends nothing (e.g. the Pause key's release).
    None,
    Bytes(&'static [u8]),
}

impl ScanCode {
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            ScanCode::None => &[],
            ScanCode::Bytes(bytes) => bytes,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ScanCode::None)
    }
}

/// PS/2 mouse packet format negotiated with the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseProtocol {
    /// 3-byte packets, 3 buttons, no wheel.
    #[default]
    Standard,
    /// 4-byte packets with an 8-bit wheel.
    IntelliMouse,
    /// 4-byte packets with a 4-bit wheel and buttons 4 and 5.
    Explorer,
}

impl MouseProtocol {
    /// Bytes per movement packet.
    pub fn packet_len(self) -> usize {
        match self {
            MouseProtocol::Standard => 3,
            MouseProtocol::IntelliMouse | MouseProtocol::Explorer => 4,
        }
    }

    /// Wheel values one packet can carry. `(0, 0)` when the packet has no
    /// wheel byte.
    pub fn wheel_range(self) -> (i32, i32) {
        match self {
            MouseProtocol::Standard => (0, 0),
            MouseProtocol::IntelliMouse => (i8::MIN as i32, i8::MAX as i32),
            MouseProtocol::Explorer => (packet::WHEEL_MIN, packet::WHEEL_MAX),
        }
    }

    /// Device ID reported to the host's Get Device ID command.
    pub fn device_id(self) -> u8 {
        match self {
            MouseProtocol::Standard => 0x00,
            MouseProtocol::IntelliMouse => 0x03,
            MouseProtocol::Explorer => 0x04,
        }
    }
}
