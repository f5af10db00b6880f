//! Keyboard input report decoding.
//!
//! Two field shapes carry key presses:
//! ```text
//! Bitmap: Report Size 1, Report Count > 1
//!         bit i set => usages[i] pressed (modifiers, NKRO keyboards)
//! Array:  Report Size 8 or 16
//!         each slot holds a pressed usage ID, 0 = empty slot
//! ```
//! Anything else (padding, constants) is skipped.

use alloc::vec::Vec;

use super::bits::{bit, extract_unsigned};
use super::report_map::ReportLayout;
use super::Decoded;

/// Keys held down in one input report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardState {
    /// Usage page shared by every entry in `pressed`.
    pub usage_page: u16,
    pressed: Vec<u16>,
}

impl KeyboardState {
    pub fn new(usage_page: u16) -> Self {
        Self {
            usage_page,
            pressed: Vec::new(),
        }
    }

    /// Mark a usage pressed. Duplicates are ignored.
    pub fn press(&mut self, usage: u16) {
        if !self.pressed.contains(&usage) {
            self.pressed.push(usage);
        }
    }

    /// Pressed usages in report order.
    pub fn pressed(&self) -> &[u16] {
        &self.pressed
    }

    pub fn is_pressed(&self, usage: u16) -> bool {
        self.pressed.contains(&usage)
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }
}

/// Decode the pressed-key set of one keyboard input report.
///
/// The state's usage page comes from the first field that declares usages;
/// fields on other pages are skipped. A field that runs past the end of
/// `report` is dropped and the first such failure is reported alongside the
/// partial state.
pub fn decode_keyboard(report: &[u8], layout: &ReportLayout) -> Decoded<KeyboardState> {
    let mut page: Option<u16> = None;
    let mut state = KeyboardState::default();
    let mut error = None;

    for field in layout.fields() {
        let is_bitmap = field.is_bitmap();
        let is_array = field.bit_width == 8 || field.bit_width == 16;
        if !is_bitmap && !is_array {
            continue;
        }
        if field.usages.is_empty() {
            continue;
        }
        match page {
            None => {
                page = Some(field.usage_page);
                state.usage_page = field.usage_page;
            }
            Some(p) if p != field.usage_page => continue,
            Some(_) => {}
        }

        if is_bitmap {
            // Bit by bit so bitmaps wider than 32 bits (NKRO) still decode.
            for (i, &usage) in field.usages.iter().enumerate().take(field.repeat_count as usize) {
                match bit(report, field.bit_offset().saturating_add(i as u32)) {
                    Ok(true) => state.press(usage),
                    Ok(false) => {}
                    Err(e) => {
                        error.get_or_insert(e);
                        break;
                    }
                }
            }
        } else {
            for slot in 0..field.repeat_count {
                let offset = field
                    .bit_offset()
                    .saturating_add(slot.saturating_mul(field.bit_width));
                match extract_unsigned(report, offset, field.bit_width) {
                    Ok(0) => {}
                    Ok(usage) => state.press(usage as u16),
                    Err(e) => {
                        error.get_or_insert(e);
                        break;
                    }
                }
            }
        }
    }

    if let Some(e) = error {
        warn!("keyboard report partially decoded: {}", e);
    }

    Decoded { state, error }
}
