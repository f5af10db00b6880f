//! Boot-protocol report descriptors.
//!
//! A BLE HID device in boot protocol mode sends fixed-layout reports and may
//! not expose a readable Report Map. These are the standard boot layouts,
//! parsed with [`ReportMap::parse`](super::ReportMap::parse) like any other
//! descriptor.

/// Device class of a boot-protocol peripheral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootDevice {
    Keyboard,
    Mouse,
}

impl BootDevice {
    pub fn descriptor(self) -> &'static [u8] {
        match self {
            BootDevice::Keyboard => KEYBOARD_DESCRIPTOR,
            BootDevice::Mouse => MOUSE_DESCRIPTOR,
        }
    }

    /// Input report length in bytes.
    pub fn report_len(self) -> usize {
        match self {
            BootDevice::Keyboard => KEYBOARD_REPORT_LEN,
            BootDevice::Mouse => MOUSE_REPORT_LEN,
        }
    }
}

/// Boot keyboard input report length in bytes.
pub const KEYBOARD_REPORT_LEN: usize = 8;

/// Boot mouse input report length in bytes (with wheel).
pub const MOUSE_REPORT_LEN: usize = 4;

/// Boot-protocol keyboard.
///
/// Input (8 bytes):
/// ```text
/// Byte 0: Modifier keys (bitfield)
///         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
///         Bit 2 = Left Alt,   Bit 3 = Left GUI,
///         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
///         Bit 6 = Right Alt,  Bit 7 = Right GUI
/// Byte 1: Reserved (0x00)
/// Byte 2-7: Up to 6 simultaneous key codes (HID usage codes)
/// ```
/// Output: 5 LED bits + 3 padding.
pub const KEYBOARD_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    //
    //   - Modifier keys (8 bits) -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0xE0, //   Usage Minimum (Left Control)
    0x29, 0xE7, //   Usage Maximum (Right GUI)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Reserved byte -
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x01, //   Input (Constant) - padding
    //
    //   - LED output (5 bits + 3 padding) -
    0x05, 0x08, //   Usage Page (LEDs)
    0x19, 0x01, //   Usage Minimum (Num Lock)
    0x29, 0x05, //   Usage Maximum (Kana)
    0x95, 0x05, //   Report Count (5)
    0x75, 0x01, //   Report Size (1)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x03, //   Report Size (3)
    0x91, 0x01, //   Output (Constant) - padding
    //
    //   - Key codes (6 bytes) -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0x00, //   Usage Minimum (0)
    0x29, 0xFF, //   Usage Maximum (255)
    0x15, 0x00, //   Logical Minimum (0)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x95, 0x06, //   Report Count (6)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x00, //   Input (Data, Array)
    //
    0xC0, // End Collection
];

/// Boot-protocol 3-button mouse with scroll wheel.
///
/// Input (4 bytes): buttons, X, Y, wheel.
pub const MOUSE_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x02, // Usage (Mouse)
    0xA1, 0x01, // Collection (Application)
    0x09, 0x01, //   Usage (Pointer)
    0xA1, 0x00, //   Collection (Physical)
    //
    //   - Buttons (3 bits + 5 padding) -
    0x05, 0x09, //     Usage Page (Buttons)
    0x19, 0x01, //     Usage Minimum (Button 1)
    0x29, 0x03, //     Usage Maximum (Button 3)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x95, 0x03, //     Report Count (3)
    0x75, 0x01, //     Report Size (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x95, 0x01, //     Report Count (1)
    0x75, 0x05, //     Report Size (5)
    0x81, 0x01, //     Input (Constant) - padding
    //
    //   - X, Y displacement -
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7F, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
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
    0xC0, //   End Collection (Physical)
    0xC0, // End Collection (Application)
];
