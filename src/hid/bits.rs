//! Bit-level field access for HID reports.
//!
//! HID packs fields LSB-first: bit `n` of a report is bit `n % 8` of byte
//! `n / 8`, and multi-byte values are little-endian.

use crate::error::DecodeError;

/// Read `bit_size` bits starting at `bit_offset`, zero-extended.
///
/// A zero-width read returns 0 without touching the buffer.
pub fn extract_unsigned(buf: &[u8], bit_offset: u32, bit_size: u32) -> Result<u32, DecodeError> {
    if bit_size == 0 {
        return Ok(0);
    }
    if bit_size > 32 {
        return Err(DecodeError::FieldTooWide { bit_size });
    }
    let end = bit_offset as u64 + bit_size as u64;
    if end > buf.len() as u64 * 8 {
        return Err(DecodeError::OutOfBounds {
            bit_offset,
            bit_size,
            len: buf.len(),
        });
    }

    // At most 5 bytes are spanned by a 32-bit value at any bit alignment.
    let first = (bit_offset / 8) as usize;
    let last = ((end - 1) / 8) as usize;
    let mut acc: u64 = 0;
    for (i, byte) in buf[first..=last].iter().enumerate() {
        acc |= (*byte as u64) << (8 * i);
    }
    let value = (acc >> (bit_offset % 8)) & ((1u64 << bit_size) - 1);
    Ok(value as u32)
}

/// Read `bit_size` bits starting at `bit_offset`, sign-extended from the
/// field's top bit.
pub fn extract_signed(buf: &[u8], bit_offset: u32, bit_size: u32) -> Result<i32, DecodeError> {
    let raw = extract_unsigned(buf, bit_offset, bit_size)?;
    if bit_size == 0 || bit_size == 32 {
        return Ok(raw as i32);
    }
    let shift = 32 - bit_size;
    Ok(((raw << shift) as i32) >> shift)
}

/// Read a single bit.
pub fn bit(buf: &[u8], bit_offset: u32) -> Result<bool, DecodeError> {
    extract_unsigned(buf, bit_offset, 1).map(|b| b != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unaligned_unsigned() {
        // 0b1011_0100, 0b0000_0011: bits 2..=9 = 0b11_1011_01
        let buf = [0xB4, 0x03];
        assert_eq!(extract_unsigned(&buf, 2, 8), Ok(0xED));
        assert_eq!(extract_unsigned(&buf, 0, 16), Ok(0x03B4));
        assert_eq!(extract_unsigned(&buf, 4, 0), Ok(0));
    }

    #[test]
    fn signed_twelve_bit() {
        // 12-bit -1 followed by 12-bit +5
        let buf = [0xFF, 0x5F, 0x00];
        assert_eq!(extract_signed(&buf, 0, 12), Ok(-1));
        assert_eq!(extract_signed(&buf, 12, 12), Ok(5));
        assert_eq!(extract_unsigned(&buf, 0, 12), Ok(0xFFF));
    }

    #[test]
    fn full_width() {
        let buf = [0x00, 0x78, 0x56, 0x34, 0x12];
        assert_eq!(extract_unsigned(&buf, 8, 32), Ok(0x1234_5678));
        assert_eq!(extract_unsigned(&[0xFF; 5], 4, 32), Ok(u32::MAX));
        assert_eq!(extract_signed(&[0xFF; 4], 0, 32), Ok(-1));
    }

    #[test]
    fn bounds() {
        let buf = [0u8; 2];
        assert_eq!(
            extract_unsigned(&buf, 9, 8),
            Err(DecodeError::OutOfBounds {
                bit_offset: 9,
                bit_size: 8,
                len: 2
            })
        );
        assert_eq!(
            extract_unsigned(&buf, 0, 33),
            Err(DecodeError::FieldTooWide { bit_size: 33 })
        );
        assert!(bit(&buf, 15).is_ok());
        assert!(bit(&buf, 16).is_err());
    }
}
