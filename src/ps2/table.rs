//! HID usage to PS/2 scan code data.
//!
//! One table per usage page, each sorted by usage ID. Every row holds the
//! `[make, break]` sequences for scan code set 1 and set 2.
//!
//! Set 1 breaks are the make code with bit 7 set; set 2 breaks insert
//! `F0` before the final byte. Extended keys carry an `E0` prefix in both
//! sets. Rows marked `Unassigned` have no PS/2 equivalent.

/// One make or break sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Code {
    /// The transition sends nothing.
    None,
    /// No mapping exists.
    Unassigned,
    Seq(&'static [u8]),
}

pub(super) struct Entry {
    pub usage: u16,
    /// `[make, break]` in set 1.
    pub set1: [Code; 2],
    /// `[make, break]` in set 2.
    pub set2: [Code; 2],
}

pub(super) static SYSTEM_CONTROL: &[Entry] = &[
    // System Power
    Entry {
        usage: 0x81,
        set1: [Code::Seq(&[0xE0, 0x5E]), Code::Seq(&[0xE0, 0xDE])],
        set2: [Code::Seq(&[0xE0, 0x37]), Code::Seq(&[0xE0, 0xF0, 0x37])],
    },
    // System Sleep
    Entry {
        usage: 0x82,
        set1: [Code::Seq(&[0xE0, 0x5F]), Code::Seq(&[0xE0, 0xDF])],
        set2: [Code::Seq(&[0xE0, 0x3F]), Code::Seq(&[0xE0, 0xF0, 0x3F])],
    },
    // System Wake
    Entry {
        usage: 0x83,
        set1: [Code::Seq(&[0xE0, 0x63]), Code::Seq(&[0xE0, 0xE3])],
        set2: [Code::Seq(&[0xE0, 0x5E]), Code::Seq(&[0xE0, 0xF0, 0x5E])],
    },
];

pub(super) static KEYBOARD_KEYPAD: &[Entry] = &[
    // No Event
    Entry {
        usage: 0x00,
        set1: [Code::None, Code::None],
        set2: [Code::None, Code::None],
    },
    // Overrun Error
    Entry {
        usage: 0x01,
        set1: [Code::Seq(&[0xFF]), Code::None],
        set2: [Code::Seq(&[0x00]), Code::None],
    },
    // POST Fail
    Entry {
        usage: 0x02,
        set1: [Code::Seq(&[0xFC]), Code::None],
        set2: [Code::Seq(&[0xFC]), Code::None],
    },
    // ErrorUndefined
    Entry {
        usage: 0x03,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // a A
    Entry {
        usage: 0x04,
        set1: [Code::Seq(&[0x1E]), Code::Seq(&[0x9E])],
        set2: [Code::Seq(&[0x1C]), Code::Seq(&[0xF0, 0x1C])],
    },
    // b B
    Entry {
        usage: 0x05,
        set1: [Code::Seq(&[0x30]), Code::Seq(&[0xB0])],
        set2: [Code::Seq(&[0x32]), Code::Seq(&[0xF0, 0x32])],
    },
    // c C
    Entry {
        usage: 0x06,
        set1: [Code::Seq(&[0x2E]), Code::Seq(&[0xAE])],
        set2: [Code::Seq(&[0x21]), Code::Seq(&[0xF0, 0x21])],
    },
    // d D
    Entry {
        usage: 0x07,
        set1: [Code::Seq(&[0x20]), Code::Seq(&[0xA0])],
        set2: [Code::Seq(&[0x23]), Code::Seq(&[0xF0, 0x23])],
    },
    // e E
    Entry {
        usage: 0x08,
        set1: [Code::Seq(&[0x12]), Code::Seq(&[0x92])],
        set2: [Code::Seq(&[0x24]), Code::Seq(&[0xF0, 0x24])],
    },
    // f F
    Entry {
        usage: 0x09,
        set1: [Code::Seq(&[0x21]), Code::Seq(&[0xA1])],
        set2: [Code::Seq(&[0x2B]), Code::Seq(&[0xF0, 0x2B])],
    },
    // g G
    Entry {
        usage: 0x0A,
        set1: [Code::Seq(&[0x22]), Code::Seq(&[0xA2])],
        set2: [Code::Seq(&[0x34]), Code::Seq(&[0xF0, 0x34])],
    },
    // h H
    Entry {
        usage: 0x0B,
        set1: [Code::Seq(&[0x23]), Code::Seq(&[0xA3])],
        set2: [Code::Seq(&[0x33]), Code::Seq(&[0xF0, 0x33])],
    },
    // i I
    Entry {
        usage: 0x0C,
        set1: [Code::Seq(&[0x17]), Code::Seq(&[0x97])],
        set2: [Code::Seq(&[0x43]), Code::Seq(&[0xF0, 0x43])],
    },
    // j J
    Entry {
        usage: 0x0D,
        set1: [Code::Seq(&[0x24]), Code::Seq(&[0xA4])],
        set2: [Code::Seq(&[0x3B]), Code::Seq(&[0xF0, 0x3B])],
    },
    // k K
    Entry {
        usage: 0x0E,
        set1: [Code::Seq(&[0x25]), Code::Seq(&[0xA5])],
        set2: [Code::Seq(&[0x42]), Code::Seq(&[0xF0, 0x42])],
    },
    // l L
    Entry {
        usage: 0x0F,
        set1: [Code::Seq(&[0x26]), Code::Seq(&[0xA6])],
        set2: [Code::Seq(&[0x4B]), Code::Seq(&[0xF0, 0x4B])],
    },
    // m M
    Entry {
        usage: 0x10,
        set1: [Code::Seq(&[0x32]), Code::Seq(&[0xB2])],
        set2: [Code::Seq(&[0x3A]), Code::Seq(&[0xF0, 0x3A])],
    },
    // n N
    Entry {
        usage: 0x11,
        set1: [Code::Seq(&[0x31]), Code::Seq(&[0xB1])],
        set2: [Code::Seq(&[0x31]), Code::Seq(&[0xF0, 0x31])],
    },
    // o O
    Entry {
        usage: 0x12,
        set1: [Code::Seq(&[0x18]), Code::Seq(&[0x98])],
        set2: [Code::Seq(&[0x44]), Code::Seq(&[0xF0, 0x44])],
    },
    // p P
    Entry {
        usage: 0x13,
        set1: [Code::Seq(&[0x19]), Code::Seq(&[0x99])],
        set2: [Code::Seq(&[0x4D]), Code::Seq(&[0xF0, 0x4D])],
    },
    // q Q
    Entry {
        usage: 0x14,
        set1: [Code::Seq(&[0x10]), Code::Seq(&[0x90])],
        set2: [Code::Seq(&[0x15]), Code::Seq(&[0xF0, 0x15])],
    },
    // r R
    Entry {
        usage: 0x15,
        set1: [Code::Seq(&[0x13]), Code::Seq(&[0x93])],
        set2: [Code::Seq(&[0x2D]), Code::Seq(&[0xF0, 0x2D])],
    },
    // s S
    Entry {
        usage: 0x16,
        set1: [Code::Seq(&[0x1F]), Code::Seq(&[0x9F])],
        set2: [Code::Seq(&[0x1B]), Code::Seq(&[0xF0, 0x1B])],
    },
    // t T
    Entry {
        usage: 0x17,
        set1: [Code::Seq(&[0x14]), Code::Seq(&[0x94])],
        set2: [Code::Seq(&[0x2C]), Code::Seq(&[0xF0, 0x2C])],
    },
    // u U
    Entry {
        usage: 0x18,
        set1: [Code::Seq(&[0x16]), Code::Seq(&[0x96])],
        set2: [Code::Seq(&[0x3C]), Code::Seq(&[0xF0, 0x3C])],
    },
    // v V
    Entry {
        usage: 0x19,
        set1: [Code::Seq(&[0x2F]), Code::Seq(&[0xAF])],
        set2: [Code::Seq(&[0x2A]), Code::Seq(&[0xF0, 0x2A])],
    },
    // w W
    Entry {
        usage: 0x1A,
        set1: [Code::Seq(&[0x11]), Code::Seq(&[0x91])],
        set2: [Code::Seq(&[0x1D]), Code::Seq(&[0xF0, 0x1D])],
    },
    // x X
    Entry {
        usage: 0x1B,
        set1: [Code::Seq(&[0x2D]), Code::Seq(&[0xAD])],
        set2: [Code::Seq(&[0x22]), Code::Seq(&[0xF0, 0x22])],
    },
    // y Y
    Entry {
        usage: 0x1C,
        set1: [Code::Seq(&[0x15]), Code::Seq(&[0x95])],
        set2: [Code::Seq(&[0x35]), Code::Seq(&[0xF0, 0x35])],
    },
    // z Z
    Entry {
        usage: 0x1D,
        set1: [Code::Seq(&[0x2C]), Code::Seq(&[0xAC])],
        set2: [Code::Seq(&[0x1A]), Code::Seq(&[0xF0, 0x1A])],
    },
    // 1 Exclamation
    Entry {
        usage: 0x1E,
        set1: [Code::Seq(&[0x02]), Code::Seq(&[0x82])],
        set2: [Code::Seq(&[0x16]), Code::Seq(&[0xF0, 0x16])],
    },
    // 2 At
    Entry {
        usage: 0x1F,
        set1: [Code::Seq(&[0x03]), Code::Seq(&[0x83])],
        set2: [Code::Seq(&[0x1E]), Code::Seq(&[0xF0, 0x1E])],
    },
    // 3 Hash
    Entry {
        usage: 0x20,
        set1: [Code::Seq(&[0x04]), Code::Seq(&[0x84])],
        set2: [Code::Seq(&[0x26]), Code::Seq(&[0xF0, 0x26])],
    },
    // 4 Dollar
    Entry {
        usage: 0x21,
        set1: [Code::Seq(&[0x05]), Code::Seq(&[0x85])],
        set2: [Code::Seq(&[0x25]), Code::Seq(&[0xF0, 0x25])],
    },
    // 5 Percent
    Entry {
        usage: 0x22,
        set1: [Code::Seq(&[0x06]), Code::Seq(&[0x86])],
        set2: [Code::Seq(&[0x2E]), Code::Seq(&[0xF0, 0x2E])],
    },
    // 6 Caret
    Entry {
        usage: 0x23,
        set1: [Code::Seq(&[0x07]), Code::Seq(&[0x87])],
        set2: [Code::Seq(&[0x36]), Code::Seq(&[0xF0, 0x36])],
    },
    // 7 Ampersand
    Entry {
        usage: 0x24,
        set1: [Code::Seq(&[0x08]), Code::Seq(&[0x88])],
        set2: [Code::Seq(&[0x3D]), Code::Seq(&[0xF0, 0x3D])],
    },
    // 8 Asterisk
    Entry {
        usage: 0x25,
        set1: [Code::Seq(&[0x09]), Code::Seq(&[0x89])],
        set2: [Code::Seq(&[0x3E]), Code::Seq(&[0xF0, 0x3E])],
    },
    // 9 OpenParen
    Entry {
        usage: 0x26,
        set1: [Code::Seq(&[0x0A]), Code::Seq(&[0x8A])],
        set2: [Code::Seq(&[0x46]), Code::Seq(&[0xF0, 0x46])],
    },
    // 0 CloseParen
    Entry {
        usage: 0x27,
        set1: [Code::Seq(&[0x0B]), Code::Seq(&[0x8B])],
        set2: [Code::Seq(&[0x45]), Code::Seq(&[0xF0, 0x45])],
    },
    // Return
    Entry {
        usage: 0x28,
        set1: [Code::Seq(&[0x1C]), Code::Seq(&[0x9C])],
        set2: [Code::Seq(&[0x5A]), Code::Seq(&[0xF0, 0x5A])],
    },
    // Escape
    Entry {
        usage: 0x29,
        set1: [Code::Seq(&[0x01]), Code::Seq(&[0x81])],
        set2: [Code::Seq(&[0x76]), Code::Seq(&[0xF0, 0x76])],
    },
    // Backspace
    Entry {
        usage: 0x2A,
        set1: [Code::Seq(&[0x0E]), Code::Seq(&[0x8E])],
        set2: [Code::Seq(&[0x66]), Code::Seq(&[0xF0, 0x66])],
    },
    // Tab
    Entry {
        usage: 0x2B,
        set1: [Code::Seq(&[0x0F]), Code::Seq(&[0x8F])],
        set2: [Code::Seq(&[0x0D]), Code::Seq(&[0xF0, 0x0D])],
    },
    // Space
    Entry {
        usage: 0x2C,
        set1: [Code::Seq(&[0x39]), Code::Seq(&[0xB9])],
        set2: [Code::Seq(&[0x29]), Code::Seq(&[0xF0, 0x29])],
    },
    // HyphenMinus Underscore
    Entry {
        usage: 0x2D,
        set1: [Code::Seq(&[0x0C]), Code::Seq(&[0x8C])],
        set2: [Code::Seq(&[0x4E]), Code::Seq(&[0xF0, 0x4E])],
    },
    // Equal Plus
    Entry {
        usage: 0x2E,
        set1: [Code::Seq(&[0x0D]), Code::Seq(&[0x8D])],
        set2: [Code::Seq(&[0x55]), Code::Seq(&[0xF0, 0x55])],
    },
    // OpenBracket OpenBrace
    Entry {
        usage: 0x2F,
        set1: [Code::Seq(&[0x1A]), Code::Seq(&[0x9A])],
        set2: [Code::Seq(&[0x54]), Code::Seq(&[0xF0, 0x54])],
    },
    // CloseBracket CloseBrace
    Entry {
        usage: 0x30,
        set1: [Code::Seq(&[0x1B]), Code::Seq(&[0x9B])],
        set2: [Code::Seq(&[0x5B]), Code::Seq(&[0xF0, 0x5B])],
    },
    // Backslash Pipe
    Entry {
        usage: 0x31,
        set1: [Code::Seq(&[0x2B]), Code::Seq(&[0xAB])],
        set2: [Code::Seq(&[0x5D]), Code::Seq(&[0xF0, 0x5D])],
    },
    // Europe 1
    Entry {
        usage: 0x32,
        set1: [Code::Seq(&[0x2B]), Code::Seq(&[0xAB])],
        set2: [Code::Seq(&[0x5D]), Code::Seq(&[0xF0, 0x5D])],
    },
    // Semicolon Colon
    Entry {
        usage: 0x33,
        set1: [Code::Seq(&[0x27]), Code::Seq(&[0xA7])],
        set2: [Code::Seq(&[0x4C]), Code::Seq(&[0xF0, 0x4C])],
    },
    // SingleQuote DoubleQuote
    Entry {
        usage: 0x34,
        set1: [Code::Seq(&[0x28]), Code::Seq(&[0xA8])],
        set2: [Code::Seq(&[0x52]), Code::Seq(&[0xF0, 0x52])],
    },
    // Backtick Tilde
    Entry {
        usage: 0x35,
        set1: [Code::Seq(&[0x29]), Code::Seq(&[0xA9])],
        set2: [Code::Seq(&[0x0E]), Code::Seq(&[0xF0, 0x0E])],
    },
    // Comma LessThan
    Entry {
        usage: 0x36,
        set1: [Code::Seq(&[0x33]), Code::Seq(&[0xB3])],
        set2: [Code::Seq(&[0x41]), Code::Seq(&[0xF0, 0x41])],
    },
    // Dot GreaterThan
    Entry {
        usage: 0x37,
        set1: [Code::Seq(&[0x34]), Code::Seq(&[0xB4])],
        set2: [Code::Seq(&[0x49]), Code::Seq(&[0xF0, 0x49])],
    },
    // Slash Question
    Entry {
        usage: 0x38,
        set1: [Code::Seq(&[0x35]), Code::Seq(&[0xB5])],
        set2: [Code::Seq(&[0x4A]), Code::Seq(&[0xF0, 0x4A])],
    },
    // Caps Lock
    Entry {
        usage: 0x39,
        set1: [Code::Seq(&[0x3A]), Code::Seq(&[0xBA])],
        set2: [Code::Seq(&[0x58]), Code::Seq(&[0xF0, 0x58])],
    },
    // F1
    Entry {
        usage: 0x3A,
        set1: [Code::Seq(&[0x3B]), Code::Seq(&[0xBB])],
        set2: [Code::Seq(&[0x05]), Code::Seq(&[0xF0, 0x05])],
    },
    // F2
    Entry {
        usage: 0x3B,
        set1: [Code::Seq(&[0x3C]), Code::Seq(&[0xBC])],
        set2: [Code::Seq(&[0x06]), Code::Seq(&[0xF0, 0x06])],
    },
    // F3
    Entry {
        usage: 0x3C,
        set1: [Code::Seq(&[0x3D]), Code::Seq(&[0xBD])],
        set2: [Code::Seq(&[0x04]), Code::Seq(&[0xF0, 0x04])],
    },
    // F4
    Entry {
        usage: 0x3D,
        set1: [Code::Seq(&[0x3E]), Code::Seq(&[0xBE])],
        set2: [Code::Seq(&[0x0C]), Code::Seq(&[0xF0, 0x0C])],
    },
    // F5
    Entry {
        usage: 0x3E,
        set1: [Code::Seq(&[0x3F]), Code::Seq(&[0xBF])],
        set2: [Code::Seq(&[0x03]), Code::Seq(&[0xF0, 0x03])],
    },
    // F6
    Entry {
        usage: 0x3F,
        set1: [Code::Seq(&[0x40]), Code::Seq(&[0xC0])],
        set2: [Code::Seq(&[0x0B]), Code::Seq(&[0xF0, 0x0B])],
    },
    // F7
    Entry {
        usage: 0x40,
        set1: [Code::Seq(&[0x41]), Code::Seq(&[0xC1])],
        set2: [Code::Seq(&[0x83]), Code::Seq(&[0xF0, 0x83])],
    },
    // F8
    Entry {
        usage: 0x41,
        set1: [Code::Seq(&[0x42]), Code::Seq(&[0xC2])],
        set2: [Code::Seq(&[0x0A]), Code::Seq(&[0xF0, 0x0A])],
    },
    // F9
    Entry {
        usage: 0x42,
        set1: [Code::Seq(&[0x43]), Code::Seq(&[0xC3])],
        set2: [Code::Seq(&[0x01]), Code::Seq(&[0xF0, 0x01])],
    },
    // F10
    Entry {
        usage: 0x43,
        set1: [Code::Seq(&[0x44]), Code::Seq(&[0xC4])],
        set2: [Code::Seq(&[0x09]), Code::Seq(&[0xF0, 0x09])],
    },
    // F11
    Entry {
        usage: 0x44,
        set1: [Code::Seq(&[0x57]), Code::Seq(&[0xD7])],
        set2: [Code::Seq(&[0x78]), Code::Seq(&[0xF0, 0x78])],
    },
    // F12
    Entry {
        usage: 0x45,
        set1: [Code::Seq(&[0x58]), Code::Seq(&[0xD8])],
        set2: [Code::Seq(&[0x07]), Code::Seq(&[0xF0, 0x07])],
    },
    // Print Screen
    Entry {
        usage: 0x46,
        set1: [Code::Seq(&[0xE0, 0x37]), Code::Seq(&[0xE0, 0xB7])],
        set2: [Code::Seq(&[0xE0, 0x7C]), Code::Seq(&[0xE0, 0xF0, 0x7C])],
    },
    // Scroll Lock
    Entry {
        usage: 0x47,
        set1: [Code::Seq(&[0x46]), Code::Seq(&[0xC6])],
        set2: [Code::Seq(&[0x7E]), Code::Seq(&[0xF0, 0x7E])],
    },
    // Pause
    Entry {
        usage: 0x48,
        set1: [Code::Seq(&[0xE1, 0x1D, 0x45, 0xE1, 0x9D, 0xC5]), Code::None],
        set2: [Code::Seq(&[0xE1, 0x14, 0x77, 0xE1, 0xF0, 0x14, 0xF0, 0x77]), Code::None],
    },
    // Insert
    Entry {
        usage: 0x49,
        set1: [Code::Seq(&[0xE0, 0x52]), Code::Seq(&[0xE0, 0xD2])],
        set2: [Code::Seq(&[0xE0, 0x70]), Code::Seq(&[0xE0, 0xF0, 0x70])],
    },
    // Home
    Entry {
        usage: 0x4A,
        set1: [Code::Seq(&[0xE0, 0x47]), Code::Seq(&[0xE0, 0xC7])],
        set2: [Code::Seq(&[0xE0, 0x6C]), Code::Seq(&[0xE0, 0xF0, 0x6C])],
    },
    // Page Up
    Entry {
        usage: 0x4B,
        set1: [Code::Seq(&[0xE0, 0x49]), Code::Seq(&[0xE0, 0xC9])],
        set2: [Code::Seq(&[0xE0, 0x7D]), Code::Seq(&[0xE0, 0xF0, 0x7D])],
    },
    // Delete
    Entry {
        usage: 0x4C,
        set1: [Code::Seq(&[0xE0, 0x53]), Code::Seq(&[0xE0, 0xD3])],
        set2: [Code::Seq(&[0xE0, 0x71]), Code::Seq(&[0xE0, 0xF0, 0x71])],
    },
    // End
    Entry {
        usage: 0x4D,
        set1: [Code::Seq(&[0xE0, 0x4F]), Code::Seq(&[0xE0, 0xCF])],
        set2: [Code::Seq(&[0xE0, 0x69]), Code::Seq(&[0xE0, 0xF0, 0x69])],
    },
    // Page Down
    Entry {
        usage: 0x4E,
        set1: [Code::Seq(&[0xE0, 0x51]), Code::Seq(&[0xE0, 0xD1])],
        set2: [Code::Seq(&[0xE0, 0x7A]), Code::Seq(&[0xE0, 0xF0, 0x7A])],
    },
    // Right Arrow
    Entry {
        usage: 0x4F,
        set1: [Code::Seq(&[0xE0, 0x4D]), Code::Seq(&[0xE0, 0xCD])],
        set2: [Code::Seq(&[0xE0, 0x74]), Code::Seq(&[0xE0, 0xF0, 0x74])],
    },
    // Left Arrow
    Entry {
        usage: 0x50,
        set1: [Code::Seq(&[0xE0, 0x4B]), Code::Seq(&[0xE0, 0xCB])],
        set2: [Code::Seq(&[0xE0, 0x6B]), Code::Seq(&[0xE0, 0xF0, 0x6B])],
    },
    // Down Arrow
    Entry {
        usage: 0x51,
        set1: [Code::Seq(&[0xE0, 0x50]), Code::Seq(&[0xE0, 0xD0])],
        set2: [Code::Seq(&[0xE0, 0x72]), Code::Seq(&[0xE0, 0xF0, 0x72])],
    },
    // Up Arrow
    Entry {
        usage: 0x52,
        set1: [Code::Seq(&[0xE0, 0x48]), Code::Seq(&[0xE0, 0xC8])],
        set2: [Code::Seq(&[0xE0, 0x75]), Code::Seq(&[0xE0, 0xF0, 0x75])],
    },
    // Num Lock
    Entry {
        usage: 0x53,
        set1: [Code::Seq(&[0x45]), Code::Seq(&[0xC5])],
        set2: [Code::Seq(&[0x77]), Code::Seq(&[0xF0, 0x77])],
    },
    // Keypad Slash
    Entry {
        usage: 0x54,
        set1: [Code::Seq(&[0xE0, 0x35]), Code::Seq(&[0xE0, 0xB5])],
        set2: [Code::Seq(&[0xE0, 0x4A]), Code::Seq(&[0xE0, 0xF0, 0x4A])],
    },
    // Keypad Asterisk
    Entry {
        usage: 0x55,
        set1: [Code::Seq(&[0x37]), Code::Seq(&[0xB7])],
        set2: [Code::Seq(&[0x7C]), Code::Seq(&[0xF0, 0x7C])],
    },
    // Keypad Minus
    Entry {
        usage: 0x56,
        set1: [Code::Seq(&[0x4A]), Code::Seq(&[0xCA])],
        set2: [Code::Seq(&[0x7B]), Code::Seq(&[0xF0, 0x7B])],
    },
    // Keypad Plus
    Entry {
        usage: 0x57,
        set1: [Code::Seq(&[0x4E]), Code::Seq(&[0xCE])],
        set2: [Code::Seq(&[0x79]), Code::Seq(&[0xF0, 0x79])],
    },
    // Keypad Enter
    Entry {
        usage: 0x58,
        set1: [Code::Seq(&[0xE0, 0x1C]), Code::Seq(&[0xE0, 0x9C])],
        set2: [Code::Seq(&[0xE0, 0x5A]), Code::Seq(&[0xE0, 0xF0, 0x5A])],
    },
    // Keypad 1 End
    Entry {
        usage: 0x59,
        set1: [Code::Seq(&[0x4F]), Code::Seq(&[0xCF])],
        set2: [Code::Seq(&[0x69]), Code::Seq(&[0xF0, 0x69])],
    },
    // Keypad 2 Down
    Entry {
        usage: 0x5A,
        set1: [Code::Seq(&[0x50]), Code::Seq(&[0xD0])],
        set2: [Code::Seq(&[0x72]), Code::Seq(&[0xF0, 0x72])],
    },
    // Keypad 3 PageDn
    Entry {
        usage: 0x5B,
        set1: [Code::Seq(&[0x51]), Code::Seq(&[0xD1])],
        set2: [Code::Seq(&[0x7A]), Code::Seq(&[0xF0, 0x7A])],
    },
    // Keypad 4 Left
    Entry {
        usage: 0x5C,
        set1: [Code::Seq(&[0x4B]), Code::Seq(&[0xCB])],
        set2: [Code::Seq(&[0x6B]), Code::Seq(&[0xF0, 0x6B])],
    },
    // Keypad 5
    Entry {
        usage: 0x5D,
        set1: [Code::Seq(&[0x4C]), Code::Seq(&[0xCC])],
        set2: [Code::Seq(&[0x73]), Code::Seq(&[0xF0, 0x73])],
    },
    // Keypad 6 Right
    Entry {
        usage: 0x5E,
        set1: [Code::Seq(&[0x4D]), Code::Seq(&[0xCD])],
        set2: [Code::Seq(&[0x74]), Code::Seq(&[0xF0, 0x74])],
    },
    // Keypad 7 Home
    Entry {
        usage: 0x5F,
        set1: [Code::Seq(&[0x47]), Code::Seq(&[0xC7])],
        set2: [Code::Seq(&[0x6C]), Code::Seq(&[0xF0, 0x6C])],
    },
    // Keypad 8 Up
    Entry {
        usage: 0x60,
        set1: [Code::Seq(&[0x48]), Code::Seq(&[0xC8])],
        set2: [Code::Seq(&[0x75]), Code::Seq(&[0xF0, 0x75])],
    },
    // Keypad 9 PageUp
    Entry {
        usage: 0x61,
        set1: [Code::Seq(&[0x49]), Code::Seq(&[0xC9])],
        set2: [Code::Seq(&[0x7D]), Code::Seq(&[0xF0, 0x7D])],
    },
    // Keypad 0 Insert
    Entry {
        usage: 0x62,
        set1: [Code::Seq(&[0x52]), Code::Seq(&[0xD2])],
        set2: [Code::Seq(&[0x70]), Code::Seq(&[0xF0, 0x70])],
    },
    // Keypad Dot Delete
    Entry {
        usage: 0x63,
        set1: [Code::Seq(&[0x53]), Code::Seq(&[0xD3])],
        set2: [Code::Seq(&[0x71]), Code::Seq(&[0xF0, 0x71])],
    },
    // Europe 2
    Entry {
        usage: 0x64,
        set1: [Code::Seq(&[0x56]), Code::Seq(&[0xD6])],
        set2: [Code::Seq(&[0x61]), Code::Seq(&[0xF0, 0x61])],
    },
    // App
    Entry {
        usage: 0x65,
        set1: [Code::Seq(&[0xE0, 0x5D]), Code::Seq(&[0xE0, 0xDD])],
        set2: [Code::Seq(&[0xE0, 0x2F]), Code::Seq(&[0xE0, 0xF0, 0x2F])],
    },
    // Keyboard Power
    Entry {
        usage: 0x66,
        set1: [Code::Seq(&[0xE0, 0x5E]), Code::Seq(&[0xE0, 0xDE])],
        set2: [Code::Seq(&[0xE0, 0x37]), Code::Seq(&[0xE0, 0xF0, 0x37])],
    },
    // Keypad Equal
    Entry {
        usage: 0x67,
        set1: [Code::Seq(&[0x59]), Code::Seq(&[0xD9])],
        set2: [Code::Seq(&[0x0F]), Code::Seq(&[0xF0, 0x0F])],
    },
    // F13
    Entry {
        usage: 0x68,
        set1: [Code::Seq(&[0x64]), Code::Seq(&[0xE4])],
        set2: [Code::Seq(&[0x08]), Code::Seq(&[0xF0, 0x08])],
    },
    // F14
    Entry {
        usage: 0x69,
        set1: [Code::Seq(&[0x65]), Code::Seq(&[0xE5])],
        set2: [Code::Seq(&[0x10]), Code::Seq(&[0xF0, 0x10])],
    },
    // F15
    Entry {
        usage: 0x6A,
        set1: [Code::Seq(&[0x66]), Code::Seq(&[0xE6])],
        set2: [Code::Seq(&[0x18]), Code::Seq(&[0xF0, 0x18])],
    },
    // F16
    Entry {
        usage: 0x6B,
        set1: [Code::Seq(&[0x67]), Code::Seq(&[0xE7])],
        set2: [Code::Seq(&[0x20]), Code::Seq(&[0xF0, 0x20])],
    },
    // F17
    Entry {
        usage: 0x6C,
        set1: [Code::Seq(&[0x68]), Code::Seq(&[0xE8])],
        set2: [Code::Seq(&[0x28]), Code::Seq(&[0xF0, 0x28])],
    },
    // F18
    Entry {
        usage: 0x6D,
        set1: [Code::Seq(&[0x69]), Code::Seq(&[0xE9])],
        set2: [Code::Seq(&[0x30]), Code::Seq(&[0xF0, 0x30])],
    },
    // F19
    Entry {
        usage: 0x6E,
        set1: [Code::Seq(&[0x6A]), Code::Seq(&[0xEA])],
        set2: [Code::Seq(&[0x38]), Code::Seq(&[0xF0, 0x38])],
    },
    // F20
    Entry {
        usage: 0x6F,
        set1: [Code::Seq(&[0x6B]), Code::Seq(&[0xEB])],
        set2: [Code::Seq(&[0x40]), Code::Seq(&[0xF0, 0x40])],
    },
    // F21
    Entry {
        usage: 0x70,
        set1: [Code::Seq(&[0x6C]), Code::Seq(&[0xEC])],
        set2: [Code::Seq(&[0x48]), Code::Seq(&[0xF0, 0x48])],
    },
    // F22
    Entry {
        usage: 0x71,
        set1: [Code::Seq(&[0x6D]), Code::Seq(&[0xED])],
        set2: [Code::Seq(&[0x50]), Code::Seq(&[0xF0, 0x50])],
    },
    // F23
    Entry {
        usage: 0x72,
        set1: [Code::Seq(&[0x6E]), Code::Seq(&[0xEE])],
        set2: [Code::Seq(&[0x57]), Code::Seq(&[0xF0, 0x57])],
    },
    // F24
    Entry {
        usage: 0x73,
        set1: [Code::Seq(&[0x76]), Code::Seq(&[0xF6])],
        set2: [Code::Seq(&[0x5F]), Code::Seq(&[0xF0, 0x5F])],
    },
    // Keyboard Execute
    Entry {
        usage: 0x74,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Help
    Entry {
        usage: 0x75,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Menu
    Entry {
        usage: 0x76,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Select
    Entry {
        usage: 0x77,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Stop
    Entry {
        usage: 0x78,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Again
    Entry {
        usage: 0x79,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Undo
    Entry {
        usage: 0x7A,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Cut
    Entry {
        usage: 0x7B,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Copy
    Entry {
        usage: 0x7C,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Paste
    Entry {
        usage: 0x7D,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Find
    Entry {
        usage: 0x7E,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Mute
    Entry {
        usage: 0x7F,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Volume Up
    Entry {
        usage: 0x80,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Volume Dn
    Entry {
        usage: 0x81,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Locking Caps Lock
    Entry {
        usage: 0x82,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Locking Num Lock
    Entry {
        usage: 0x83,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Locking Scroll Lock
    Entry {
        usage: 0x84,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keypad Comma
    Entry {
        usage: 0x85,
        set1: [Code::Seq(&[0x7E]), Code::Seq(&[0xFE])],
        set2: [Code::Seq(&[0x6D]), Code::Seq(&[0xF0, 0x6D])],
    },
    // Keyboard Equal Sign
    Entry {
        usage: 0x86,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Ro
    Entry {
        usage: 0x87,
        set1: [Code::Seq(&[0x73]), Code::Seq(&[0xF3])],
        set2: [Code::Seq(&[0x51]), Code::Seq(&[0xF0, 0x51])],
    },
    // Katakana Hiragana
    Entry {
        usage: 0x88,
        set1: [Code::Seq(&[0x70]), Code::Seq(&[0xF0])],
        set2: [Code::Seq(&[0x13]), Code::Seq(&[0xF0, 0x13])],
    },
    // Yen
    Entry {
        usage: 0x89,
        set1: [Code::Seq(&[0x7D]), Code::Seq(&[0xFD])],
        set2: [Code::Seq(&[0x6A]), Code::Seq(&[0xF0, 0x6A])],
    },
    // Henkan
    Entry {
        usage: 0x8A,
        set1: [Code::Seq(&[0x79]), Code::Seq(&[0xF9])],
        set2: [Code::Seq(&[0x64]), Code::Seq(&[0xF0, 0x64])],
    },
    // Muhenkan
    Entry {
        usage: 0x8B,
        set1: [Code::Seq(&[0x7B]), Code::Seq(&[0xFB])],
        set2: [Code::Seq(&[0x67]), Code::Seq(&[0xF0, 0x67])],
    },
    // PC9800 Keypad Comma
    Entry {
        usage: 0x8C,
        set1: [Code::Seq(&[0x5C]), Code::Seq(&[0xDC])],
        set2: [Code::Seq(&[0x27]), Code::Seq(&[0xF0, 0x27])],
    },
    // Keyboard IntSingleQuotel 7
    Entry {
        usage: 0x8D,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard IntSingleQuotel 8
    Entry {
        usage: 0x8E,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard IntSingleQuotel 9
    Entry {
        usage: 0x8F,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Hanguel English
    Entry {
        usage: 0x90,
        set1: [Code::Seq(&[0xF2]), Code::None],
        set2: [Code::Seq(&[0xF2]), Code::None],
    },
    // Hanja
    Entry {
        usage: 0x91,
        set1: [Code::Seq(&[0xF1]), Code::None],
        set2: [Code::Seq(&[0xF1]), Code::None],
    },
    // Katakana
    Entry {
        usage: 0x92,
        set1: [Code::Seq(&[0x78]), Code::Seq(&[0xF8])],
        set2: [Code::Seq(&[0x63]), Code::Seq(&[0xF0, 0x63])],
    },
    // Hiragana
    Entry {
        usage: 0x93,
        set1: [Code::Seq(&[0x77]), Code::Seq(&[0xF7])],
        set2: [Code::Seq(&[0x62]), Code::Seq(&[0xF0, 0x62])],
    },
    // Zenkaku Hankaku
    Entry {
        usage: 0x94,
        set1: [Code::Seq(&[0x76]), Code::Seq(&[0xF6])],
        set2: [Code::Seq(&[0x5F]), Code::Seq(&[0xF0, 0x5F])],
    },
    // Keyboard Lang 6
    Entry {
        usage: 0x95,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Lang 7
    Entry {
        usage: 0x96,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Lang 8
    Entry {
        usage: 0x97,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Lang 9
    Entry {
        usage: 0x98,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Alternate Erase
    Entry {
        usage: 0x99,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard SysReq Attention
    Entry {
        usage: 0x9A,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Cancel
    Entry {
        usage: 0x9B,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Clear
    Entry {
        usage: 0x9C,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Prior
    Entry {
        usage: 0x9D,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Return
    Entry {
        usage: 0x9E,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Separator
    Entry {
        usage: 0x9F,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Out
    Entry {
        usage: 0xA0,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Oper
    Entry {
        usage: 0xA1,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard Clear Again
    Entry {
        usage: 0xA2,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard CrSel Props
    Entry {
        usage: 0xA3,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Keyboard ExSel
    Entry {
        usage: 0xA4,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Left Control
    Entry {
        usage: 0xE0,
        set1: [Code::Seq(&[0x1D]), Code::Seq(&[0x9D])],
        set2: [Code::Seq(&[0x14]), Code::Seq(&[0xF0, 0x14])],
    },
    // Left Shift
    Entry {
        usage: 0xE1,
        set1: [Code::Seq(&[0x2A]), Code::Seq(&[0xAA])],
        set2: [Code::Seq(&[0x12]), Code::Seq(&[0xF0, 0x12])],
    },
    // Left Alt
    Entry {
        usage: 0xE2,
        set1: [Code::Seq(&[0x38]), Code::Seq(&[0xB8])],
        set2: [Code::Seq(&[0x11]), Code::Seq(&[0xF0, 0x11])],
    },
    // Left GUI
    Entry {
        usage: 0xE3,
        set1: [Code::Seq(&[0xE0, 0x5B]), Code::Seq(&[0xE0, 0xDB])],
        set2: [Code::Seq(&[0xE0, 0x1F]), Code::Seq(&[0xE0, 0xF0, 0x1F])],
    },
    // Right Control
    Entry {
        usage: 0xE4,
        set1: [Code::Seq(&[0xE0, 0x1D]), Code::Seq(&[0xE0, 0x9D])],
        set2: [Code::Seq(&[0xE0, 0x14]), Code::Seq(&[0xE0, 0xF0, 0x14])],
    },
    // Right Shift
    Entry {
        usage: 0xE5,
        set1: [Code::Seq(&[0x36]), Code::Seq(&[0xB6])],
        set2: [Code::Seq(&[0x59]), Code::Seq(&[0xF0, 0x59])],
    },
    // Right Alt
    Entry {
        usage: 0xE6,
        set1: [Code::Seq(&[0xE0, 0x38]), Code::Seq(&[0xE0, 0xB8])],
        set2: [Code::Seq(&[0xE0, 0x11]), Code::Seq(&[0xE0, 0xF0, 0x11])],
    },
    // Right GUI
    Entry {
        usage: 0xE7,
        set1: [Code::Seq(&[0xE0, 0x5C]), Code::Seq(&[0xE0, 0xDC])],
        set2: [Code::Seq(&[0xE0, 0x27]), Code::Seq(&[0xE0, 0xF0, 0x27])],
    },
];

pub(super) static CONSUMER: &[Entry] = &[
    // Scan Next Track
    Entry {
        usage: 0x00B5,
        set1: [Code::Seq(&[0xE0, 0x19]), Code::Seq(&[0xE0, 0x99])],
        set2: [Code::Seq(&[0xE0, 0x4D]), Code::Seq(&[0xE0, 0xF0, 0x4D])],
    },
    // Scan Previous Track
    Entry {
        usage: 0x00B6,
        set1: [Code::Seq(&[0xE0, 0x10]), Code::Seq(&[0xE0, 0x90])],
        set2: [Code::Seq(&[0xE0, 0x15]), Code::Seq(&[0xE0, 0xF0, 0x15])],
    },
    // Stop
    Entry {
        usage: 0x00B7,
        set1: [Code::Seq(&[0xE0, 0x24]), Code::Seq(&[0xE0, 0xA4])],
        set2: [Code::Seq(&[0xE0, 0x3B]), Code::Seq(&[0xE0, 0xF0, 0x3B])],
    },
    // Play Pause
    Entry {
        usage: 0x00CD,
        set1: [Code::Seq(&[0xE0, 0x22]), Code::Seq(&[0xE0, 0xA2])],
        set2: [Code::Seq(&[0xE0, 0x34]), Code::Seq(&[0xE0, 0xF0, 0x34])],
    },
    // Mute
    Entry {
        usage: 0x00E2,
        set1: [Code::Seq(&[0xE0, 0x20]), Code::Seq(&[0xE0, 0xA0])],
        set2: [Code::Seq(&[0xE0, 0x23]), Code::Seq(&[0xE0, 0xF0, 0x23])],
    },
    // Bass Boost
    Entry {
        usage: 0x00E5,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Loudness
    Entry {
        usage: 0x00E7,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Volume Up
    Entry {
        usage: 0x00E9,
        set1: [Code::Seq(&[0xE0, 0x30]), Code::Seq(&[0xE0, 0xB0])],
        set2: [Code::Seq(&[0xE0, 0x32]), Code::Seq(&[0xE0, 0xF0, 0x32])],
    },
    // Volume Down
    Entry {
        usage: 0x00EA,
        set1: [Code::Seq(&[0xE0, 0x2E]), Code::Seq(&[0xE0, 0xAE])],
        set2: [Code::Seq(&[0xE0, 0x21]), Code::Seq(&[0xE0, 0xF0, 0x21])],
    },
    // Bass Up
    Entry {
        usage: 0x0152,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Bass Down
    Entry {
        usage: 0x0153,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Treble Up
    Entry {
        usage: 0x0154,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Treble Down
    Entry {
        usage: 0x0155,
        set1: [Code::Unassigned, Code::Unassigned],
        set2: [Code::Unassigned, Code::Unassigned],
    },
    // Media Select
    Entry {
        usage: 0x0183,
        set1: [Code::Seq(&[0xE0, 0x6D]), Code::Seq(&[0xE0, 0xED])],
        set2: [Code::Seq(&[0xE0, 0x50]), Code::Seq(&[0xE0, 0xF0, 0x50])],
    },
    // Mail
    Entry {
        usage: 0x018A,
        set1: [Code::Seq(&[0xE0, 0x6C]), Code::Seq(&[0xE0, 0xEC])],
        set2: [Code::Seq(&[0xE0, 0x48]), Code::Seq(&[0xE0, 0xF0, 0x48])],
    },
    // Calculator
    Entry {
        usage: 0x0192,
        set1: [Code::Seq(&[0xE0, 0x21]), Code::Seq(&[0xE0, 0xA1])],
        set2: [Code::Seq(&[0xE0, 0x2B]), Code::Seq(&[0xE0, 0xF0, 0x2B])],
    },
    // My Computer
    Entry {
        usage: 0x0194,
        set1: [Code::Seq(&[0xE0, 0x6B]), Code::Seq(&[0xE0, 0xEB])],
        set2: [Code::Seq(&[0xE0, 0x40]), Code::Seq(&[0xE0, 0xF0, 0x40])],
    },
    // WWW Search
    Entry {
        usage: 0x0221,
        set1: [Code::Seq(&[0xE0, 0x65]), Code::Seq(&[0xE0, 0xE5])],
        set2: [Code::Seq(&[0xE0, 0x10]), Code::Seq(&[0xE0, 0xF0, 0x10])],
    },
    // WWW Home
    Entry {
        usage: 0x0223,
        set1: [Code::Seq(&[0xE0, 0x32]), Code::Seq(&[0xE0, 0xB2])],
        set2: [Code::Seq(&[0xE0, 0x3A]), Code::Seq(&[0xE0, 0xF0, 0x3A])],
    },
    // WWW Back
    Entry {
        usage: 0x0224,
        set1: [Code::Seq(&[0xE0, 0x6A]), Code::Seq(&[0xE0, 0xEA])],
        set2: [Code::Seq(&[0xE0, 0x38]), Code::Seq(&[0xE0, 0xF0, 0x38])],
    },
    // WWW Forward
    Entry {
        usage: 0x0225,
        set1: [Code::Seq(&[0xE0, 0x69]), Code::Seq(&[0xE0, 0xE9])],
        set2: [Code::Seq(&[0xE0, 0x30]), Code::Seq(&[0xE0, 0xF0, 0x30])],
    },
    // WWW Stop
    Entry {
        usage: 0x0226,
        set1: [Code::Seq(&[0xE0, 0x68]), Code::Seq(&[0xE0, 0xE8])],
        set2: [Code::Seq(&[0xE0, 0x28]), Code::Seq(&[0xE0, 0xF0, 0x28])],
    },
    // WWW Refresh
    Entry {
        usage: 0x0227,
        set1: [Code::Seq(&[0xE0, 0x67]), Code::Seq(&[0xE0, 0xE7])],
        set2: [Code::Seq(&[0xE0, 0x20]), Code::Seq(&[0xE0, 0xF0, 0x20])],
    },
    // WWW Favorites
    Entry {
        usage: 0x022A,
        set1: [Code::Seq(&[0xE0, 0x66]), Code::Seq(&[0xE0, 0xE6])],
        set2: [Code::Seq(&[0xE0, 0x18]), Code::Seq(&[0xE0, 0xF0, 0x18])],
    },
];
