//! PS/2 mouse movement packets.
//!
//! Standard 3-byte packet:
//! ```text
//! Byte 0: Bit 0 = Left, Bit 1 = Right, Bit 2 = Middle, Bit 3 = always 1,
//!         Bit 4 = X sign, Bit 5 = Y sign,
//!         Bit 6 = X overflow, Bit 7 = Y overflow
//! Byte 1: X movement (low 8 bits of a 9-bit two's complement value)
//! Byte 2: Y movement (low 8 bits, positive = up)
//! ```
//! IntelliMouse appends an 8-bit wheel byte. Explorer appends
//! `Bit 0-3 = wheel (4-bit), Bit 4 = button 4, Bit 5 = button 5`.
//!
//! PS/2 counts Y and the wheel opposite to HID, so both are negated here.

use super::MouseProtocol;
use crate::config::MAX_SPLIT_PACKETS;
use crate::hid::MouseState;

/// Largest per-packet movement on one axis.
pub const MAX_DELTA: i32 = 255;

/// Explorer wheel range (4-bit signed). IntelliMouse carries an `i8`.
pub const WHEEL_MIN: i32 = -8;
pub const WHEEL_MAX: i32 = 7;

/// Longest packet (IntelliMouse / Explorer).
pub const MAX_PACKET_LEN: usize = 4;

/// One report handed to the PS/2 mouse sink.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ps2MouseReport {
    /// HID convention: positive = right.
    pub dx: i32,
    /// HID convention: positive = down.
    pub dy: i32,
    /// HID convention: positive = away from the user.
    pub wheel: i32,
    /// Bit 0 = left, 1 = right, 2 = middle, 3 = button 4, 4 = button 5.
    pub buttons: u8,
}

impl Ps2MouseReport {
    pub fn is_idle(&self) -> bool {
        self.dx == 0 && self.dy == 0 && self.wheel == 0 && self.buttons == 0
    }

    /// Break into reports that each fit one `protocol` packet: ±255 per
    /// axis, wheel within [`MouseProtocol::wheel_range`]. Every part carries
    /// the same buttons. Always yields at least one report.
    ///
    /// The parts sum to `self` as long as it fits in [`MAX_SPLIT_PACKETS`]
    /// packets. Larger deltas saturate, and the wheel is dropped when the
    /// protocol has none.
    pub fn split(
        &self,
        protocol: MouseProtocol,
    ) -> heapless::Vec<Ps2MouseReport, MAX_SPLIT_PACKETS> {
        let (wheel_min, wheel_max) = protocol.wheel_range();
        let packets = MAX_SPLIT_PACKETS as i32;
        let mut rest = Ps2MouseReport {
            dx: self.dx.clamp(-MAX_DELTA * packets, MAX_DELTA * packets),
            dy: self.dy.clamp(-MAX_DELTA * packets, MAX_DELTA * packets),
            wheel: self.wheel.clamp(wheel_min * packets, wheel_max * packets),
            buttons: self.buttons,
        };

        let mut parts = heapless::Vec::new();
        for _ in 0..MAX_SPLIT_PACKETS {
            let part = Ps2MouseReport {
                dx: rest.dx.clamp(-MAX_DELTA, MAX_DELTA),
                dy: rest.dy.clamp(-MAX_DELTA, MAX_DELTA),
                wheel: rest.wheel.clamp(wheel_min, wheel_max),
                buttons: self.buttons,
            };
            rest.dx -= part.dx;
            rest.dy -= part.dy;
            rest.wheel -= part.wheel;
            let _ = parts.push(part);
            if rest.dx == 0 && rest.dy == 0 && rest.wheel == 0 {
                break;
            }
        }
        parts
    }

    /// Encode as a movement packet. Out-of-range axes set the overflow bit
    /// and saturate; call [`split`](Self::split) first to avoid that.
    pub fn encode(&self, protocol: MouseProtocol) -> heapless::Vec<u8, MAX_PACKET_LEN> {
        let (x, x_overflow) = nine_bit(self.dx);
        let (y, y_overflow) = nine_bit(self.dy.saturating_neg());

        let mut status = (self.buttons & 0x07) | 0x08;
        if x < 0 {
            status |= 0x10;
        }
        if y < 0 {
            status |= 0x20;
        }
        if x_overflow {
            status |= 0x40;
        }
        if y_overflow {
            status |= 0x80;
        }

        let mut packet = heapless::Vec::new();
        let _ = packet.extend_from_slice(&[status, x as u8, y as u8]);

        let (wheel_min, wheel_max) = protocol.wheel_range();
        let z = self.wheel.saturating_neg().clamp(wheel_min, wheel_max);
        match protocol {
            MouseProtocol::Standard => {}
            MouseProtocol::IntelliMouse => {
                let _ = packet.push(z as i8 as u8);
            }
            MouseProtocol::Explorer => {
                let _ = packet.push((z as u8 & 0x0F) | (self.buttons & 0x18) << 1);
            }
        }
        packet
    }
}

/// Clamp to the 9-bit range -256..=255, reporting whether it overflowed.
fn nine_bit(v: i32) -> (i32, bool) {
    let clamped = v.clamp(-256, 255);
    (clamped, clamped != v)
}

impl From<MouseState> for Ps2MouseReport {
    fn from(state: MouseState) -> Self {
        Self {
            dx: state.x,
            dy: state.y,
            wheel: state.wheel,
            buttons: state.buttons & 0x1F,
        }
    }
}
