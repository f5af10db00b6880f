//! Scan code lookup.

use super::table::{Code, Entry, CONSUMER, KEYBOARD_KEYPAD, SYSTEM_CONTROL};
use super::{KeyTransition, ScanCode, ScanCodeSet};
use crate::error::LookupMiss;
use crate::hid::UsagePage;

/// Scan code for one key transition.
///
/// Covers Generic Desktop system controls (power, sleep, wake), the whole
/// Keyboard/Keypad page and the media keys of the Consumer page.
/// `Ok(ScanCode::None)` means the transition is valid but sends nothing;
/// usages without a mapping are a [`LookupMiss`].
pub fn lookup(
    usage: u16,
    transition: KeyTransition,
    page: u16,
    set: ScanCodeSet,
) -> Result<ScanCode, LookupMiss> {
    let miss = LookupMiss {
        page,
        usage,
        set: set.number(),
    };

    let table: &[Entry] = match UsagePage::from(page) {
        UsagePage::GenericDesktop => SYSTEM_CONTROL,
        UsagePage::Keyboard => KEYBOARD_KEYPAD,
        UsagePage::Consumer => CONSUMER,
        _ => return Err(miss),
    };

    let entry = table
        .binary_search_by_key(&usage, |e| e.usage)
        .map(|i| &table[i])
        .map_err(|_| miss)?;

    let codes = match set {
        ScanCodeSet::Set1 => &entry.set1,
        ScanCodeSet::Set2 => &entry.set2,
    };
    let code = match transition {
        KeyTransition::Make => codes[0],
        KeyTransition::Break => codes[1],
    };

    match code {
        Code::None => Ok(ScanCode::None),
        Code::Unassigned => Err(miss),
        Code::Seq(bytes) => Ok(ScanCode::Bytes(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYBOARD: u16 = UsagePage::KEYBOARD;

    #[test]
    fn escape_set2() {
        assert_eq!(
            lookup(0x29, KeyTransition::Make, KEYBOARD, ScanCodeSet::Set2),
            Ok(ScanCode::Bytes(&[0x76]))
        );
        assert_eq!(
            lookup(0x29, KeyTransition::Break, KEYBOARD, ScanCodeSet::Set2),
            Ok(ScanCode::Bytes(&[0xF0, 0x76]))
        );
    }

    #[test]
    fn letter_a_both_sets() {
        assert_eq!(
            lookup(0x04, KeyTransition::Make, KEYBOARD, ScanCodeSet::Set1),
            Ok(ScanCode::Bytes(&[0x1E]))
        );
        assert_eq!(
            lookup(0x04, KeyTransition::Break, KEYBOARD, ScanCodeSet::Set1),
            Ok(ScanCode::Bytes(&[0x9E]))
        );
        assert_eq!(
            lookup(0x04, KeyTransition::Make, KEYBOARD, ScanCodeSet::Set2),
            Ok(ScanCode::Bytes(&[0x1C]))
        );
    }

    #[test]
    fn pause_has_no_break() {
        let make = lookup(0x48, KeyTransition::Make, KEYBOARD, ScanCodeSet::Set2).unwrap();
        assert_eq!(make.as_bytes().len(), 8);
        assert_eq!(make.as_bytes()[0], 0xE1);
        assert_eq!(
            lookup(0x48, KeyTransition::Break, KEYBOARD, ScanCodeSet::Set2),
            Ok(ScanCode::None)
        );
    }

    #[test]
    fn system_power_extended() {
        assert_eq!(
            lookup(0x81, KeyTransition::Break, UsagePage::GENERIC_DESKTOP, ScanCodeSet::Set2),
            Ok(ScanCode::Bytes(&[0xE0, 0xF0, 0x37]))
        );
    }

    #[test]
    fn consumer_play_pause() {
        assert_eq!(
            lookup(0xCD, KeyTransition::Make, UsagePage::CONSUMER, ScanCodeSet::Set2),
            Ok(ScanCode::Bytes(&[0xE0, 0x34]))
        );
    }

    #[test]
    fn misses() {
        // Unassigned row.
        assert_eq!(
            lookup(0x03, KeyTransition::Make, KEYBOARD, ScanCodeSet::Set2),
            Err(LookupMiss {
                page: KEYBOARD,
                usage: 0x03,
                set: 2
            })
        );
        // Usage beyond the table.
        assert!(lookup(0x1234, KeyTransition::Make, KEYBOARD, ScanCodeSet::Set1).is_err());
        // Page without a table.
        assert!(lookup(0x01, KeyTransition::Make, UsagePage::BUTTON, ScanCodeSet::Set2).is_err());
    }
}
