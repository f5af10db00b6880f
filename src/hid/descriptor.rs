//! HID Report Descriptor interpreter.
//!
//! Turns the raw Report Map read from a BLE HID peripheral into a
//! [`ReportMap`]: the bit layout of every input/output/feature report,
//! grouped by report ID.
//!
//! ## Report Descriptor Structure
//!
//! A Report Descriptor is a flat sequence of items. Each item starts with
//! a prefix byte:
//! ```text
//! Bit 7-4: Tag
//! Bit 3-2: Type (0 = Main, 1 = Global, 2 = Local)
//! Bit 1-0: Size (0, 1, 2 or 4 value bytes)
//! ```
//! followed by a little-endian value of that size.
//!
//! - Global items (Usage Page, Report Size, Report Count, Logical Min/Max,
//!   Report ID) persist until overwritten; Push/Pop save and restore them.
//! - Local items (Usage, Usage Min/Max) collect the usages of the next
//!   Main item and are cleared by it.
//! - Main items (Input, Output, Feature) declare a field; Collection /
//!   End Collection group them. Every Application collection becomes one
//!   layout per report type.
//!
//! The interpreter is a single left-to-right pass with explicit stacks for
//! Push/Pop and for open collections.

use alloc::vec::Vec;

use super::report_map::{ReportField, ReportLayout, ReportMap, ReportType};
use crate::error::ParseError;

/// Item prefixes with the size bits masked off.
pub mod tag {
    // Main items
    pub const INPUT: u8 = 0x80;
    pub const OUTPUT: u8 = 0x90;
    pub const COLLECTION: u8 = 0xA0;
    pub const FEATURE: u8 = 0xB0;
    pub const END_COLLECTION: u8 = 0xC0;
    // Global items
    pub const USAGE_PAGE: u8 = 0x04;
    pub const LOGICAL_MIN: u8 = 0x14;
    pub const LOGICAL_MAX: u8 = 0x24;
    pub const PHYSICAL_MIN: u8 = 0x34;
    pub const PHYSICAL_MAX: u8 = 0x44;
    pub const UNIT_EXPONENT: u8 = 0x54;
    pub const UNIT: u8 = 0x64;
    pub const REPORT_SIZE: u8 = 0x74;
    pub const REPORT_ID: u8 = 0x84;
    pub const REPORT_COUNT: u8 = 0x94;
    pub const PUSH: u8 = 0xA4;
    pub const POP: u8 = 0xB4;
    // Local items
    pub const USAGE: u8 = 0x08;
    pub const USAGE_MIN: u8 = 0x18;
    pub const USAGE_MAX: u8 = 0x28;
    pub const DESIGNATOR_INDEX: u8 = 0x38;
    pub const DESIGNATOR_MIN: u8 = 0x48;
    pub const DESIGNATOR_MAX: u8 = 0x58;
    pub const STRING_INDEX: u8 = 0x78;
    pub const STRING_MIN: u8 = 0x88;
    pub const STRING_MAX: u8 = 0x98;
    pub const DELIMITER: u8 = 0xA8;
}

/// Prefix of a long item; its real length follows in the next byte.
const LONG_ITEM_PREFIX: u8 = 0xFE;

/// Collection type byte of an Application collection.
const COLLECTION_APPLICATION: u8 = 0x01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ItemKind {
    Main,
    Global,
    Local,
    Reserved,
}

/// One short item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Item {
    /// Byte position of the prefix.
    pub offset: usize,
    /// Prefix with the size bits cleared (see [`tag`]).
    pub tag: u8,
    pub kind: ItemKind,
    /// Number of value bytes.
    pub size: usize,
    /// Value zero-extended.
    pub unsigned: u32,
    /// Value sign-extended from `size` bytes.
    pub signed: i32,
}

/// Splits a descriptor into items. Long items are skipped.
pub struct Items<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Items<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn fail(&mut self, offset: usize) -> Option<Result<Item, ParseError>> {
        self.pos = self.data.len();
        Some(Err(ParseError::Truncated { offset }))
    }
}

impl Iterator for Items<'_> {
    type Item = Result<Item, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let offset = self.pos;
            let prefix = *self.data.get(offset)?;

            if prefix == LONG_ITEM_PREFIX {
                let Some(&data_size) = self.data.get(offset + 1) else {
                    return self.fail(offset);
                };
                let end = offset + 3 + data_size as usize;
                if end > self.data.len() {
                    return self.fail(offset);
                }
                debug!("skipping long item at offset {}", offset);
                self.pos = end;
                continue;
            }

            let size = match prefix & 0x03 {
                0 => 0,
                1 => 1,
                2 => 2,
                _ => 4,
            };
            let Some(bytes) = self.data.get(offset + 1..offset + 1 + size) else {
                return self.fail(offset);
            };

            let (unsigned, signed) = match *bytes {
                [] => (0, 0),
                [b0] => (b0 as u32, b0 as i8 as i32),
                [b0, b1] => {
                    let v = u16::from_le_bytes([b0, b1]);
                    (v as u32, v as i16 as i32)
                }
                [b0, b1, b2, b3] => {
                    let v = u32::from_le_bytes([b0, b1, b2, b3]);
                    (v, v as i32)
                }
                _ => return self.fail(offset),
            };

            let kind = match (prefix >> 2) & 0x03 {
                0 => ItemKind::Main,
                1 => ItemKind::Global,
                2 => ItemKind::Local,
                _ => ItemKind::Reserved,
            };

            self.pos = offset + 1 + size;
            return Some(Ok(Item {
                offset,
                tag: prefix & 0xFC,
                kind,
                size,
                unsigned,
                signed,
            }));
        }
    }
}

/// Global item state; saved and restored by PUSH/POP.
#[derive(Clone, Copy, Debug, Default)]
struct GlobalState {
    usage_page: u16,
    report_size: u32,
    report_count: u32,
    logical_min: i32,
    logical_max: i32,
    report_id: u8,
}

/// The three layouts being filled by an open Application collection.
struct ApplicationLayouts {
    input: ReportLayout,
    output: ReportLayout,
    feature: ReportLayout,
}

impl ApplicationLayouts {
    fn new(usage_page: u16, usage: u16) -> Self {
        Self {
            input: ReportLayout::new(usage_page, usage, ReportType::Input, 0),
            output: ReportLayout::new(usage_page, usage, ReportType::Output, 0),
            feature: ReportLayout::new(usage_page, usage, ReportType::Feature, 0),
        }
    }

    fn get_mut(&mut self, report_type: ReportType) -> &mut ReportLayout {
        match report_type {
            ReportType::Input => &mut self.input,
            ReportType::Output => &mut self.output,
            ReportType::Feature => &mut self.feature,
        }
    }

    fn commit(self, report_id: u8, map: &mut ReportMap) {
        for mut layout in [self.input, self.output, self.feature] {
            layout.report_id = report_id;
            if !layout.is_empty() {
                debug!(
                    "report map: {:?} report {} page {} usage {}: {} fields, {} bits",
                    layout.report_type,
                    report_id,
                    layout.usage_page,
                    layout.usage,
                    layout.fields().len(),
                    layout.bit_len()
                );
            }
            map.insert(layout);
        }
    }
}

/// Parse a HID Report Descriptor.
pub fn parse(data: &[u8]) -> Result<ReportMap, ParseError> {
    let mut map = ReportMap::new();
    let mut global = GlobalState::default();
    let mut global_stack: Vec<GlobalState> = Vec::new();
    let mut usages: Vec<u16> = Vec::new();
    // One frame per open collection. Only Application collections own layouts.
    let mut collections: Vec<Option<ApplicationLayouts>> = Vec::new();

    for item in Items::new(data) {
        let item = item?;

        match item.tag {
            // Main items
            tag::COLLECTION => {
                let usage = usages.last().copied().unwrap_or(0);
                let kind = item.unsigned as u8;
                collections.push(
                    (kind == COLLECTION_APPLICATION)
                        .then(|| ApplicationLayouts::new(global.usage_page, usage)),
                );
            }
            tag::END_COLLECTION => {
                let collection = collections
                    .pop()
                    .ok_or(ParseError::CollectionUnderflow { offset: item.offset })?;
                if let Some(layouts) = collection {
                    layouts.commit(global.report_id, &mut map);
                }
            }
            tag::INPUT | tag::OUTPUT | tag::FEATURE => {
                let report_type = match item.tag {
                    tag::INPUT => ReportType::Input,
                    tag::OUTPUT => ReportType::Output,
                    _ => ReportType::Feature,
                };
                let field = ReportField::new(
                    global.usage_page,
                    core::mem::take(&mut usages),
                    global.report_size,
                    global.report_count,
                    global.logical_min,
                    global.logical_max,
                );
                match collections.iter_mut().rev().find_map(Option::as_mut) {
                    Some(layouts) => layouts.get_mut(report_type).push(field),
                    None => warn!(
                        "{:?} item at offset {} is outside any application collection",
                        report_type, item.offset
                    ),
                }
            }

            // Global items
            tag::USAGE_PAGE => global.usage_page = item.unsigned as u16,
            tag::REPORT_SIZE => global.report_size = item.unsigned,
            tag::REPORT_COUNT => global.report_count = item.unsigned,
            tag::LOGICAL_MIN => global.logical_min = item.signed,
            tag::LOGICAL_MAX => global.logical_max = item.signed,
            tag::REPORT_ID => global.report_id = item.unsigned as u8,
            tag::PUSH => global_stack.push(global),
            tag::POP => {
                global = global_stack
                    .pop()
                    .ok_or(ParseError::GlobalStackUnderflow { offset: item.offset })?;
            }

            // Local items
            tag::USAGE | tag::USAGE_MIN => usages.push(item.unsigned as u16),
            tag::USAGE_MAX => {
                // USAGE_MIN pushed the range start; append the rest up to max.
                let start = *usages
                    .last()
                    .ok_or(ParseError::UsageRangeWithoutStart { offset: item.offset })?;
                let max = item.unsigned.min(u16::MAX as u32);
                usages.extend((start as u32 + 1..=max).map(|usage| usage as u16));
            }

            _ => {}
        }

        if item.kind == ItemKind::Main {
            usages.clear();
        }
    }

    if !collections.is_empty() {
        warn!(
            "report map ends with {} unclosed collections",
            collections.len()
        );
    }

    Ok(map)
}

impl ReportMap {
    /// Parse a HID Report Descriptor. See [`parse`].
    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        parse(data)
    }
}
