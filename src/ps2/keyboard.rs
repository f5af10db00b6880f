//! Make/break sequencing for one keyboard report stream.
//!
//! HID reports carry the full set of held keys; PS/2 wants one event per
//! transition. The translator diffs each report against the previous one:
//!
//! ```text
//! previous {A, B}   current {B, C}
//!   => Break(A), Make(C)
//! ```
//!
//! Breaks are emitted before makes.

use alloc::vec::Vec;

use super::scancode::lookup;
use super::{KeyTransition, ScanCode, ScanCodeSet};
use crate::error::LookupMiss;
use crate::hid::KeyboardState;

/// One scan code ready for the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub page: u16,
    pub usage: u16,
    pub transition: KeyTransition,
    /// Never [`ScanCode::None`]; silent transitions produce no event.
    pub code: ScanCode,
}

impl KeyEvent {
    pub fn bytes(&self) -> &'static [u8] {
        self.code.as_bytes()
    }
}

/// Output of one [`KeyboardTranslator::translate`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Translation {
    /// Events in emission order.
    pub events: Vec<KeyEvent>,
    /// Usages skipped for lack of a scan code.
    pub misses: Vec<LookupMiss>,
}

/// Diffs successive keyboard states of one (device, report ID) stream.
#[derive(Clone, Debug)]
pub struct KeyboardTranslator {
    set: ScanCodeSet,
    previous: Option<KeyboardState>,
}

impl KeyboardTranslator {
    pub fn new(set: ScanCodeSet) -> Self {
        Self {
            set,
            previous: None,
        }
    }

    pub fn scan_code_set(&self) -> ScanCodeSet {
        self.set
    }

    /// Last translated state, if any report has been seen.
    pub fn previous(&self) -> Option<&KeyboardState> {
        self.previous.as_ref()
    }

    /// Translate a new state into make/break events.
    ///
    /// On the first report every pressed key gets a make. Afterwards, released
    /// keys get a break and newly pressed keys a make. The state is stored as
    /// the new baseline even when some lookups miss.
    pub fn translate(&mut self, current: KeyboardState) -> Translation {
        let mut out = Translation::default();

        if let Some(previous) = &self.previous {
            let same_page = previous.usage_page == current.usage_page;
            for &usage in previous.pressed() {
                if !same_page || !current.is_pressed(usage) {
                    self.emit(&mut out, previous.usage_page, usage, KeyTransition::Break);
                }
            }
        }

        for &usage in current.pressed() {
            let held = self
                .previous
                .as_ref()
                .is_some_and(|p| p.usage_page == current.usage_page && p.is_pressed(usage));
            if !held {
                self.emit(&mut out, current.usage_page, usage, KeyTransition::Make);
            }
        }

        self.previous = Some(current);
        out
    }

    fn emit(&self, out: &mut Translation, page: u16, usage: u16, transition: KeyTransition) {
        match lookup(usage, transition, page, self.set) {
            Ok(ScanCode::None) => {}
            Ok(code) => out.events.push(KeyEvent {
                page,
                usage,
                transition,
                code,
            }),
            Err(miss) => {
                warn!("{:?} skipped: {}", transition, miss);
                out.misses.push(miss);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hid::UsagePage;

    fn keys(usages: &[u16]) -> KeyboardState {
        let mut state = KeyboardState::new(UsagePage::KEYBOARD);
        for &u in usages {
            state.press(u);
        }
        state
    }

    fn bytes(t: &Translation) -> Vec<&'static [u8]> {
        t.events.iter().map(|e| e.bytes()).collect()
    }

    #[test]
    fn press_then_release() {
        let mut tr = KeyboardTranslator::new(ScanCodeSet::Set2);

        let first = tr.translate(keys(&[0x04]));
        assert_eq!(bytes(&first), [&[0x1C_u8][..]]);
        assert_eq!(first.events[0].transition, KeyTransition::Make);

        let second = tr.translate(keys(&[]));
        assert_eq!(bytes(&second), [&[0xF0_u8, 0x1C][..]]);
        assert_eq!(second.events[0].transition, KeyTransition::Break);
        assert!(second.misses.is_empty());
    }

    #[test]
    fn held_key_is_silent() {
        let mut tr = KeyboardTranslator::new(ScanCodeSet::Set2);
        tr.translate(keys(&[0x04]));
        let again = tr.translate(keys(&[0x04]));
        assert!(again.events.is_empty());
    }

    #[test]
    fn rollover_breaks_before_makes() {
        let mut tr = KeyboardTranslator::new(ScanCodeSet::Set1);
        tr.translate(keys(&[0x04, 0x05]));
        let t = tr.translate(keys(&[0x05, 0x06]));
        // Break 'a', Make 'c'
        assert_eq!(bytes(&t), [&[0x9E_u8][..], &[0x2E][..]]);
    }

    #[test]
    fn no_break_on_first_report() {
        let mut tr = KeyboardTranslator::new(ScanCodeSet::Set2);
        let t = tr.translate(keys(&[]));
        assert!(t.events.is_empty());
        assert!(tr.previous().is_some());
    }

    #[test]
    fn miss_skips_only_that_key() {
        let mut tr = KeyboardTranslator::new(ScanCodeSet::Set2);
        // 0x03 is unassigned.
        let t = tr.translate(keys(&[0x03, 0x29]));
        assert_eq!(bytes(&t), [&[0x76_u8][..]]);
        assert_eq!(t.misses.len(), 1);
        assert_eq!(t.misses[0].usage, 0x03);
    }

    #[test]
    fn pause_release_is_silent() {
        let mut tr = KeyboardTranslator::new(ScanCodeSet::Set2);
        assert_eq!(tr.translate(keys(&[0x48])).events.len(), 1);
        let t = tr.translate(keys(&[]));
        assert!(t.events.is_empty());
        assert!(t.misses.is_empty());
    }
}
