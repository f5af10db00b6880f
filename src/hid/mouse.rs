//! Mouse input report decoding.

use super::bits::{bit, extract_signed};
use super::report_map::{ReportField, ReportLayout};
use super::usage::{consumer, desktop, UsagePage};
use super::Decoded;
use crate::error::DecodeError;

/// Motion, wheels and buttons from one mouse input report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseState {
    /// Relative X movement (positive = right).
    pub x: i32,
    /// Relative Y movement (positive = down, HID convention).
    pub y: i32,
    /// Vertical wheel (positive = away from the user).
    pub wheel: i32,
    /// Horizontal wheel (AC Pan).
    pub pan: i32,
    /// Button bitfield: bit 0 = button 1 (left), bit 1 = button 2 (right),
    /// bit 2 = button 3 (middle), up to 8 buttons.
    pub buttons: u8,
}

impl MouseState {
    pub fn is_pressed(&self, button: u8) -> bool {
        button < 8 && self.buttons & (1 << button) != 0
    }
}

/// Decode one mouse input report.
///
/// - Generic Desktop X, Y and Wheel are read signed, one slot per usage.
/// - Consumer AC Pan gives the horizontal wheel.
/// - Button page bitmaps map bit `i` to button `usages[0] + i`; buttons
///   beyond 8 are dropped.
///
/// Other fields are ignored.
pub fn decode_mouse(report: &[u8], layout: &ReportLayout) -> Decoded<MouseState> {
    let mut state = MouseState::default();
    let mut error = None;

    for field in layout.fields() {
        let result = match UsagePage::from(field.usage_page) {
            UsagePage::GenericDesktop => decode_axes(report, field, &mut state),
            UsagePage::Consumer => decode_pan(report, field, &mut state),
            UsagePage::Button => decode_buttons(report, field, &mut state),
            _ => Ok(()),
        };
        if let Err(e) = result {
            error.get_or_insert(e);
        }
    }

    if let Some(e) = error {
        warn!("mouse report partially decoded: {}", e);
    }

    Decoded { state, error }
}

/// Bit offset of the `index`th value slot of a field.
fn slot_offset(field: &ReportField, index: usize) -> u32 {
    field
        .bit_offset()
        .saturating_add((index as u32).saturating_mul(field.bit_width))
}

fn decode_axes(report: &[u8], field: &ReportField, state: &mut MouseState) -> Result<(), DecodeError> {
    for (i, &usage) in field.usages.iter().enumerate() {
        let target = match usage {
            desktop::X => &mut state.x,
            desktop::Y => &mut state.y,
            desktop::WHEEL => &mut state.wheel,
            _ => continue,
        };
        *target = extract_signed(report, slot_offset(field, i), field.bit_width)?;
    }
    Ok(())
}

fn decode_pan(report: &[u8], field: &ReportField, state: &mut MouseState) -> Result<(), DecodeError> {
    for (i, &usage) in field.usages.iter().enumerate() {
        if usage == consumer::AC_PAN {
            state.pan = extract_signed(report, slot_offset(field, i), field.bit_width)?;
        }
    }
    Ok(())
}

fn decode_buttons(report: &[u8], field: &ReportField, state: &mut MouseState) -> Result<(), DecodeError> {
    if !field.is_bitmap() {
        return Ok(());
    }
    // Padding has no usages.
    let Some(&first) = field.usages.first() else {
        return Ok(());
    };
    for i in 0..field.repeat_count {
        // Button usages are 1-based.
        let index = first as u32 + i;
        if index == 0 || index > 8 {
            continue;
        }
        let mask = 1u8 << (index - 1);
        if bit(report, field.bit_offset().saturating_add(i))? {
            state.buttons |= mask;
        } else {
            state.buttons &= !mask;
        }
    }
    Ok(())
}
