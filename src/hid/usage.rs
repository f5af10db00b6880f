//! HID usage pages and the usage IDs the decoders care about.
//!
//! Values are from the HID Usage Tables 1.4.

/// Usage page codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UsagePage {
    /// Generic Desktop (mouse, keyboard, system controls).
    GenericDesktop,
    /// Keyboard/Keypad.
    Keyboard,
    /// LEDs.
    Led,
    /// Button.
    Button,
    /// Consumer Control.
    Consumer,
    /// Unknown/unsupported.
    Unknown(u16),
}

impl UsagePage {
    pub const GENERIC_DESKTOP: u16 = 0x01;
    pub const KEYBOARD: u16 = 0x07;
    pub const LED: u16 = 0x08;
    pub const BUTTON: u16 = 0x09;
    pub const CONSUMER: u16 = 0x0C;
}

impl From<u16> for UsagePage {
    fn from(code: u16) -> Self {
        match code {
            Self::GENERIC_DESKTOP => UsagePage::GenericDesktop,
            Self::KEYBOARD => UsagePage::Keyboard,
            Self::LED => UsagePage::Led,
            Self::BUTTON => UsagePage::Button,
            Self::CONSUMER => UsagePage::Consumer,
            other => UsagePage::Unknown(other),
        }
    }
}

impl From<UsagePage> for u16 {
    fn from(page: UsagePage) -> Self {
        match page {
            UsagePage::GenericDesktop => UsagePage::GENERIC_DESKTOP,
            UsagePage::Keyboard => UsagePage::KEYBOARD,
            UsagePage::Led => UsagePage::LED,
            UsagePage::Button => UsagePage::BUTTON,
            UsagePage::Consumer => UsagePage::CONSUMER,
            UsagePage::Unknown(other) => other,
        }
    }
}

/// Generic Desktop usage codes (page 0x01).
pub mod desktop {
    pub const POINTER: u16 = 0x01;
    pub const MOUSE: u16 = 0x02;
    pub const KEYBOARD: u16 = 0x06;
    pub const KEYPAD: u16 = 0x07;
    pub const X: u16 = 0x30;
    pub const Y: u16 = 0x31;
    pub const WHEEL: u16 = 0x38;
    pub const SYSTEM_CONTROL: u16 = 0x80;
}

/// Consumer usage codes (page 0x0C).
pub mod consumer {
    pub const CONSUMER_CONTROL: u16 = 0x0001;
    /// Horizontal scroll. Mice report it on the consumer page.
    pub const AC_PAN: u16 = 0x0238;
}
