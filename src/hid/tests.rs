//! Unit tests for report descriptor parsing and input report decoding.
//!
//! These tests run on the host and drive the parser and decoders with
//! hand-written descriptors.

use super::boot::{BootDevice, KEYBOARD_DESCRIPTOR, MOUSE_DESCRIPTOR};
use super::descriptor::{tag, ItemKind, Items};
use super::*;
use crate::error::{DecodeError, ParseError};
use alloc::vec::Vec;

/// Keyboard with report ID 1 and an 8-key bitmap for usages 0x04..=0x0B.
const BITMAP_KEYBOARD: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    0x85, 0x01, //   Report ID (1)
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0x04, //   Usage Minimum (a)
    0x29, 0x0B, //   Usage Maximum (h)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    0xC0, // End Collection
];

/// Mouse with 12-bit X/Y, 5 buttons, wheel and AC Pan, report ID 2.
const PRECISION_MOUSE: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x02, // Usage (Mouse)
    0xA1, 0x01, // Collection (Application)
    0x85, 0x02, //   Report ID (2)
    0x09, 0x01, //   Usage (Pointer)
    0xA1, 0x00, //   Collection (Physical)
    //
    //   - Buttons (5 bits + 3 padding) -
    0x05, 0x09, //     Usage Page (Buttons)
    0x19, 0x01, //     Usage Minimum (Button 1)
    0x29, 0x05, //     Usage Maximum (Button 5)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x95, 0x05, //     Report Count (5)
    0x75, 0x01, //     Report Size (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x95, 0x01, //     Report Count (1)
    0x75, 0x03, //     Report Size (3)
    0x81, 0x01, //     Input (Constant) - padding
    //
    //   - X, Y displacement (12 bits each) -
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x16, 0x01, 0xF8, // Logical Minimum (-2047)
    0x26, 0xFF, 0x07, // Logical Maximum (2047)
    0x75, 0x0C, //     Report Size (12)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    //
    //   - Scroll wheel -
    0x09, 0x38, //     Usage (Wheel)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7F, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    //
    //   - Horizontal wheel -
    0x05, 0x0C, //     Usage Page (Consumer)
    0x0A, 0x38, 0x02, // Usage (AC Pan)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    //
    0xC0, //   End Collection (Physical)
    0xC0, // End Collection (Application)
];

fn keyboard_layout(descriptor: &[u8], report_id: u8) -> ReportLayout {
    let map = ReportMap::parse(descriptor).unwrap();
    map.input(report_id).unwrap().clone()
}

// ═══════════════════════════════════════════════════════════════════════════
// Item Tokenizer Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn items_split_prefix_and_value() {
    // Logical Minimum (-2047), Usage (AC Pan), End Collection
    let data = [0x16, 0x01, 0xF8, 0x0A, 0x38, 0x02, 0xC0];
    let items: Vec<_> = Items::new(&data).map(|i| i.unwrap()).collect();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].tag, tag::LOGICAL_MIN);
    assert_eq!(items[0].kind, ItemKind::Global);
    assert_eq!(items[0].size, 2);
    assert_eq!(items[0].unsigned, 0xF801);
    assert_eq!(items[0].signed, -2047);

    assert_eq!(items[1].tag, tag::USAGE);
    assert_eq!(items[1].kind, ItemKind::Local);
    assert_eq!(items[1].unsigned, 0x0238);
    assert_eq!(items[1].offset, 3);

    assert_eq!(items[2].tag, tag::END_COLLECTION);
    assert_eq!(items[2].kind, ItemKind::Main);
    assert_eq!(items[2].size, 0);
}

#[test]
fn items_four_byte_value() {
    let data = [0x27, 0xFF, 0xFF, 0x00, 0x00]; // Logical Maximum (65535)
    let item = Items::new(&data).next().unwrap().unwrap();
    assert_eq!(item.size, 4);
    assert_eq!(item.unsigned, 0xFFFF);
    assert_eq!(item.signed, 0xFFFF);
}

#[test]
fn items_skip_long_items() {
    // Long item with 2 data bytes, then End Collection.
    let data = [0xFE, 0x02, 0x10, 0xAA, 0xBB, 0xC0];
    let items: Vec<_> = Items::new(&data).map(|i| i.unwrap()).collect();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].offset, 5);
}

#[test]
fn items_report_truncation_once() {
    let data = [0x05, 0x01, 0x26, 0xFF]; // second item lacks a byte
    let results: Vec<_> = Items::new(&data).collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert_eq!(results[1], Err(ParseError::Truncated { offset: 2 }));
}

// ═══════════════════════════════════════════════════════════════════════════
// Descriptor Parser Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn parse_bitmap_keyboard() {
    let map = ReportMap::parse(BITMAP_KEYBOARD).unwrap();
    let layout = map.input(1).unwrap();

    assert_eq!(layout.report_id, 1);
    assert_eq!(layout.usage_page, UsagePage::GENERIC_DESKTOP);
    assert_eq!(layout.application(), Application::Keyboard);
    assert_eq!(layout.fields().len(), 1);

    let field = &layout.fields()[0];
    assert_eq!(field.usage_page, UsagePage::KEYBOARD);
    assert_eq!(field.usages, (0x04..=0x0B).collect::<Vec<u16>>());
    assert!(field.is_bitmap());
    assert_eq!(field.bit_length(), 8);

    assert!(map.uses_report_ids());
    assert!(map.input(0).is_none());
    assert!(map.output(1).unwrap().is_empty());
}

#[test]
fn parse_boot_keyboard_offsets() {
    let map = ReportMap::parse(KEYBOARD_DESCRIPTOR).unwrap();
    let input = map.input(0).unwrap();

    // Modifiers, reserved byte, 6 key slots.
    let offsets: Vec<u32> = input.fields().iter().map(|f| f.bit_offset()).collect();
    assert_eq!(offsets, [0, 8, 16]);
    assert_eq!(input.byte_len(), BootDevice::Keyboard.report_len());

    let keys = &input.fields()[2];
    assert_eq!(keys.usages.len(), 256);
    assert_eq!(keys.logical_max, 255);

    let leds = map.output(0).unwrap();
    assert_eq!(leds.fields().len(), 2);
    assert_eq!(leds.bit_len(), 8);
    assert_eq!(leds.fields()[0].usage_page, UsagePage::LED);
}

#[test]
fn parse_offsets_accumulate() {
    let map = ReportMap::parse(PRECISION_MOUSE).unwrap();
    for layout in map.layouts(ReportType::Input) {
        let mut expected = 0;
        for field in layout.fields() {
            assert_eq!(field.bit_offset(), expected);
            assert_eq!(field.bit_length(), field.bit_width * field.repeat_count);
            expected += field.bit_length();
        }
        assert_eq!(layout.bit_len(), expected);
    }
}

#[test]
fn parse_boot_mouse_application() {
    let map = ReportMap::parse(BootDevice::Mouse.descriptor()).unwrap();
    let layout = map.input(0).unwrap();
    assert_eq!(layout.application(), Application::Mouse);
    assert_eq!(layout.byte_len(), BootDevice::Mouse.report_len());
    assert_eq!(BootDevice::Mouse.descriptor(), MOUSE_DESCRIPTOR);
    assert!(!map.uses_report_ids());
    assert!(map.resolve_input(3).is_some());
}

#[test]
fn parse_push_pop_restores_globals() {
    let data = [
        0x05, 0x01, // Usage Page (Generic Desktop)
        0x09, 0x02, // Usage (Mouse)
        0xA1, 0x01, // Collection (Application)
        0x75, 0x08, //   Report Size (8)
        0x95, 0x01, //   Report Count (1)
        0xA4, //   Push
        0x05, 0x09, //   Usage Page (Buttons)
        0x75, 0x01, //   Report Size (1)
        0x95, 0x08, //   Report Count (8)
        0x19, 0x01, //   Usage Minimum (1)
        0x29, 0x08, //   Usage Maximum (8)
        0x81, 0x02, //   Input
        0xB4, //   Pop
        0x09, 0x30, //   Usage (X)
        0x81, 0x06, //   Input
        0xC0, // End Collection
    ];
    let map = ReportMap::parse(&data).unwrap();
    let fields = map.input(0).unwrap().fields();
    assert_eq!(fields[0].usage_page, UsagePage::BUTTON);
    assert_eq!(fields[0].bit_width, 1);
    assert_eq!(fields[1].usage_page, UsagePage::GENERIC_DESKTOP);
    assert_eq!(fields[1].bit_width, 8);
    assert_eq!(fields[1].repeat_count, 1);
    assert_eq!(fields[1].bit_offset(), 8);
}

#[test]
fn parse_main_item_clears_usages() {
    let data = [
        0x05, 0x01, // Usage Page (Generic Desktop)
        0x09, 0x02, // Usage (Mouse)
        0xA1, 0x01, // Collection (Application)
        0x09, 0x30, //   Usage (X)
        0x75, 0x08, //   Report Size (8)
        0x95, 0x01, //   Report Count (1)
        0x81, 0x06, //   Input
        0x81, 0x01, //   Input (Constant) - no usages
        0xC0, // End Collection
    ];
    let map = ReportMap::parse(&data).unwrap();
    let fields = map.input(0).unwrap().fields();
    assert_eq!(fields[0].usages, [0x30]);
    assert!(fields[1].usages.is_empty());
}

#[test]
fn parse_multiple_report_ids() {
    let mut data = Vec::from(BITMAP_KEYBOARD);
    data.extend_from_slice(&[
        0x05, 0x0C, // Usage Page (Consumer)
        0x09, 0x01, // Usage (Consumer Control)
        0xA1, 0x01, // Collection (Application)
        0x85, 0x03, //   Report ID (3)
        0x19, 0x00, //   Usage Minimum (0)
        0x2A, 0x3C, 0x02, // Usage Maximum (0x23C)
        0x75, 0x10, //   Report Size (16)
        0x95, 0x01, //   Report Count (1)
        0x81, 0x00, //   Input (Data, Array)
        0xC0, // End Collection
    ]);
    let map = ReportMap::parse(&data).unwrap();
    let ids: Vec<u8> = map.layouts(ReportType::Input).map(|l| l.report_id).collect();
    assert_eq!(ids, [1, 3]);
    assert_eq!(map.input(3).unwrap().application(), Application::ConsumerControl);
    assert!(map.resolve_input(2).is_none());
}

#[test]
fn parse_nested_applications() {
    let data = [
        0x05, 0x01, // Usage Page (Generic Desktop)
        0x09, 0x06, // Usage (Keyboard)
        0xA1, 0x01, // Collection (Application)
        0x85, 0x01, //   Report ID (1)
        0x05, 0x07, //   Usage Page (Keyboard/Keypad)
        0x19, 0xE0, //   Usage Minimum (Left Control)
        0x29, 0xE7, //   Usage Maximum (Right GUI)
        0x75, 0x01, //   Report Size (1)
        0x95, 0x08, //   Report Count (8)
        0x81, 0x02, //   Input
        0xA4, //   Push
        0x05, 0x01, //   Usage Page (Generic Desktop)
        0x09, 0x02, //   Usage (Mouse)
        0xA1, 0x01, //   Collection (Application)
        0x85, 0x02, //     Report ID (2)
        0x09, 0x30, //     Usage (X)
        0x75, 0x08, //     Report Size (8)
        0x95, 0x01, //     Report Count (1)
        0x81, 0x06, //     Input
        0xC0, //   End Collection
        0xB4, //   Pop
        0x19, 0x04, //   Usage Minimum (a)
        0x29, 0x0B, //   Usage Maximum (h)
        0x81, 0x02, //   Input
        0xC0, // End Collection
    ];
    let map = ReportMap::parse(&data).unwrap();

    let mouse = map.input(2).unwrap();
    assert_eq!(mouse.application(), Application::Mouse);
    assert_eq!(mouse.fields().len(), 1);
    assert_eq!(mouse.fields()[0].usages, [0x30]);

    // The outer keyboard keeps both of its fields, contiguous.
    let keyboard = map.input(1).unwrap();
    assert_eq!(keyboard.application(), Application::Keyboard);
    assert_eq!(keyboard.fields().len(), 2);
    assert_eq!(keyboard.fields()[1].bit_offset(), 8);
    assert_eq!(keyboard.fields()[1].usage_page, UsagePage::KEYBOARD);
}

#[test]
fn parse_errors() {
    // END_COLLECTION with nothing open.
    assert_eq!(
        ReportMap::parse(&[0x05, 0x01, 0xC0]),
        Err(ParseError::CollectionUnderflow { offset: 2 })
    );
    // POP with nothing pushed.
    assert_eq!(
        ReportMap::parse(&[0xB4]),
        Err(ParseError::GlobalStackUnderflow { offset: 0 })
    );
    // Truncated 2-byte value.
    assert_eq!(
        ReportMap::parse(&[0x05, 0x01, 0x26, 0xFF]),
        Err(ParseError::Truncated { offset: 2 })
    );
    // USAGE_MAX without a range start.
    assert_eq!(
        ReportMap::parse(&[0x05, 0x07, 0x29, 0x0B]),
        Err(ParseError::UsageRangeWithoutStart { offset: 2 })
    );
}

#[test]
fn parse_ignores_fields_outside_applications() {
    let data = [
        0x75, 0x08, // Report Size (8)
        0x95, 0x01, // Report Count (1)
        0x81, 0x02, // Input
    ];
    let map = ReportMap::parse(&data).unwrap();
    assert_eq!(map.layouts(ReportType::Input).count(), 0);
}

#[test]
fn parse_discards_unclosed_application() {
    let data = [
        0x05, 0x01, // Usage Page (Generic Desktop)
        0x09, 0x02, // Usage (Mouse)
        0xA1, 0x01, // Collection (Application)
        0x09, 0x30, //   Usage (X)
        0x75, 0x08, //   Report Size (8)
        0x95, 0x01, //   Report Count (1)
        0x81, 0x06, //   Input (Data, Variable, Relative)
        // no End Collection
    ];
    let map = ReportMap::parse(&data).unwrap();
    assert_eq!(map.layouts(ReportType::Input).count(), 0);

    // The same descriptor, closed, yields the layout.
    let mut closed = data.to_vec();
    closed.push(0xC0);
    let map = ReportMap::parse(&closed).unwrap();
    assert_eq!(map.input(0).map(|l| l.byte_len()), Some(1));
}

#[test]
fn parse_empty_descriptor() {
    let map = ReportMap::parse(&[]).unwrap();
    assert_eq!(map, ReportMap::new());
}

// ═══════════════════════════════════════════════════════════════════════════
// Keyboard Decoder Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn decode_bitmap_keyboard() {
    let layout = keyboard_layout(BITMAP_KEYBOARD, 1);
    // bits 0 and 2 set
    let decoded = decode_keyboard(&[0x05], &layout);
    assert!(decoded.is_complete());
    assert_eq!(decoded.state.usage_page, UsagePage::KEYBOARD);
    assert_eq!(decoded.state.pressed(), [0x04, 0x06]);
}

#[test]
fn decode_boot_keyboard() {
    let layout = keyboard_layout(KEYBOARD_DESCRIPTOR, 0);
    // Left Shift + Right GUI, keys 'a' and 'z', one empty slot between.
    let report = [0x82, 0x00, 0x04, 0x00, 0x1D, 0x00, 0x00, 0x00];
    let state = decode_keyboard(&report, &layout).into_state();
    assert_eq!(state.pressed(), [0xE1, 0xE7, 0x04, 0x1D]);
}

#[test]
fn decode_keyboard_is_pure() {
    let layout = keyboard_layout(KEYBOARD_DESCRIPTOR, 0);
    let report = [0x01, 0x00, 0x2C, 0x04, 0x00, 0x00, 0x00, 0x00];
    assert_eq!(decode_keyboard(&report, &layout), decode_keyboard(&report, &layout));
}

#[test]
fn decode_keyboard_short_report_is_partial() {
    let layout = keyboard_layout(KEYBOARD_DESCRIPTOR, 0);
    // Modifiers and the first two key slots only.
    let decoded = decode_keyboard(&[0x02, 0x00, 0x04, 0x05], &layout);
    assert!(!decoded.is_complete());
    assert!(matches!(decoded.error, Some(DecodeError::OutOfBounds { .. })));
    assert_eq!(decoded.state.pressed(), [0xE1, 0x04, 0x05]);
}

#[test]
fn decode_nkro_bitmap_wider_than_32_bits() {
    let data = [
        0x05, 0x01, // Usage Page (Generic Desktop)
        0x09, 0x06, // Usage (Keyboard)
        0xA1, 0x01, // Collection (Application)
        0x05, 0x07, //   Usage Page (Keyboard/Keypad)
        0x19, 0x00, //   Usage Minimum (0)
        0x29, 0x3F, //   Usage Maximum (63)
        0x75, 0x01, //   Report Size (1)
        0x95, 0x40, //   Report Count (64)
        0x81, 0x02, //   Input
        0xC0, // End Collection
    ];
    let layout = keyboard_layout(&data, 0);
    let mut report = [0u8; 8];
    report[0] = 0x10; // usage 4
    report[5] = 0x01; // usage 40 (Enter)
    report[7] = 0x80; // usage 63
    let state = decode_keyboard(&report, &layout).into_state();
    assert_eq!(state.pressed(), [0x04, 0x28, 0x3F]);
}

#[test]
fn decode_keyboard_skips_other_pages() {
    let data = [
        0x05, 0x01, // Usage Page (Generic Desktop)
        0x09, 0x06, // Usage (Keyboard)
        0xA1, 0x01, // Collection (Application)
        0x05, 0x07, //   Usage Page (Keyboard/Keypad)
        0x19, 0x00, //   Usage Minimum (0)
        0x29, 0xFF, //   Usage Maximum (255)
        0x75, 0x08, //   Report Size (8)
        0x95, 0x01, //   Report Count (1)
        0x81, 0x00, //   Input (Array)
        0x05, 0x0C, //   Usage Page (Consumer)
        0x19, 0x00, //   Usage Minimum (0)
        0x29, 0xFF, //   Usage Maximum (255)
        0x81, 0x00, //   Input (Array)
        0xC0, // End Collection
    ];
    let layout = keyboard_layout(&data, 0);
    let state = decode_keyboard(&[0x04, 0xCD], &layout).into_state();
    assert_eq!(state.usage_page, UsagePage::KEYBOARD);
    assert_eq!(state.pressed(), [0x04]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Mouse Decoder Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn decode_boot_mouse() {
    let map = ReportMap::parse(MOUSE_DESCRIPTOR).unwrap();
    let layout = map.input(0).unwrap();
    // Right button, x = +5, y = -5, wheel = +1
    let decoded = decode_mouse(&[0x02, 0x05, 0xFB, 0x01], layout);
    assert!(decoded.is_complete());
    assert_eq!(
        decoded.state,
        MouseState {
            x: 5,
            y: -5,
            wheel: 1,
            pan: 0,
            buttons: 0x02,
        }
    );
    assert!(decoded.state.is_pressed(1));
}

#[test]
fn decode_precision_mouse() {
    let map = ReportMap::parse(PRECISION_MOUSE).unwrap();
    let layout = map.input(2).unwrap();
    assert_eq!(layout.byte_len(), 6);

    // Buttons 1 and 5; x = -1 (0xFFF), y = +300 (0x12C); wheel -2; pan +3
    let report = [0x11, 0xFF, 0xCF, 0x12, 0xFE, 0x03];
    let state = decode_mouse(&report, layout).into_state();
    assert_eq!(state.buttons, 0x11);
    assert_eq!(state.x, -1);
    assert_eq!(state.y, 300);
    assert_eq!(state.wheel, -2);
    assert_eq!(state.pan, 3);
}

#[test]
fn decode_mouse_short_report_keeps_leading_fields() {
    let map = ReportMap::parse(MOUSE_DESCRIPTOR).unwrap();
    let layout = map.input(0).unwrap();
    let decoded = decode_mouse(&[0x01, 0x07], layout);
    assert!(!decoded.is_complete());
    assert_eq!(decoded.state.buttons, 0x01);
    assert_eq!(decoded.state.x, 7);
    assert_eq!(decoded.state.wheel, 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Bit Extraction Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn signed_matches_unsigned_when_top_bit_clear() {
    let buf = [0x5A, 0x3C, 0x7E, 0x01];
    for offset in 0..16 {
        for size in 1..=16 {
            let unsigned = extract_unsigned(&buf, offset, size).unwrap();
            let signed = extract_signed(&buf, offset, size).unwrap();
            if unsigned & (1 << (size - 1)) == 0 {
                assert_eq!(signed, unsigned as i32);
            } else {
                assert_eq!(signed, unsigned as i32 - (1 << size));
            }
        }
    }
}
