//! Report layout model built from a HID Report Descriptor.
//!
//! A [`ReportMap`] holds one [`ReportLayout`] per (report type, report ID).
//! Each layout is an ordered list of [`ReportField`]s whose bit positions
//! are assigned as they are appended, so field `i` always starts where
//! field `i - 1` ends.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use super::usage::{consumer, desktop, UsagePage};

/// Direction of a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportType {
    Input,
    Output,
    Feature,
}

/// One Input/Output/Feature main item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportField {
    /// Usage page in effect when the item was declared.
    pub usage_page: u16,
    /// Usages in declaration order (ranges already expanded).
    pub usages: Vec<u16>,
    /// REPORT_SIZE: bits per value.
    pub bit_width: u32,
    /// REPORT_COUNT: number of values.
    pub repeat_count: u32,
    pub logical_min: i32,
    pub logical_max: i32,
    bit_offset: u32,
    bit_length: u32,
}

impl ReportField {
    pub fn new(
        usage_page: u16,
        usages: Vec<u16>,
        bit_width: u32,
        repeat_count: u32,
        logical_min: i32,
        logical_max: i32,
    ) -> Self {
        Self {
            usage_page,
            usages,
            bit_width,
            repeat_count,
            logical_min,
            logical_max,
            bit_offset: 0,
            bit_length: bit_width.saturating_mul(repeat_count),
        }
    }

    /// Position of the field's first bit within the report.
    pub fn bit_offset(&self) -> u32 {
        self.bit_offset
    }

    /// `bit_width × repeat_count`.
    pub fn bit_length(&self) -> u32 {
        self.bit_length
    }

    /// One bit per usage, e.g. modifier keys or mouse buttons.
    pub fn is_bitmap(&self) -> bool {
        self.bit_width == 1 && self.repeat_count > 1
    }
}

/// What kind of logical device an application collection describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Application {
    Keyboard,
    Keypad,
    Mouse,
    Pointer,
    ConsumerControl,
    SystemControl,
    Other { usage_page: u16, usage: u16 },
}

impl Application {
    /// Produces key presses (routed through the scan code table).
    pub fn is_keyboard_like(&self) -> bool {
        matches!(
            self,
            Application::Keyboard
                | Application::Keypad
                | Application::ConsumerControl
                | Application::SystemControl
        )
    }

    /// Produces relative motion and buttons.
    pub fn is_pointer_like(&self) -> bool {
        matches!(self, Application::Mouse | Application::Pointer)
    }
}

/// Ordered field list for one report type and report ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLayout {
    /// Usage page of the owning application collection.
    pub usage_page: u16,
    /// Usage of the owning application collection.
    pub usage: u16,
    pub report_type: ReportType,
    pub report_id: u8,
    fields: Vec<ReportField>,
}

impl ReportLayout {
    pub fn new(usage_page: u16, usage: u16, report_type: ReportType, report_id: u8) -> Self {
        Self {
            usage_page,
            usage,
            report_type,
            report_id,
            fields: Vec::new(),
        }
    }

    /// Append a field, placing it directly after the previous one.
    pub fn push(&mut self, mut field: ReportField) {
        field.bit_offset = self.bit_len();
        field.bit_length = field.bit_width.saturating_mul(field.repeat_count);
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[ReportField] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total report size in bits.
    pub fn bit_len(&self) -> u32 {
        self.fields
            .last()
            .map_or(0, |f| f.bit_offset.saturating_add(f.bit_length))
    }

    /// Total report size in whole bytes.
    pub fn byte_len(&self) -> usize {
        self.bit_len().div_ceil(8) as usize
    }

    pub fn application(&self) -> Application {
        match (UsagePage::from(self.usage_page), self.usage) {
            (UsagePage::GenericDesktop, desktop::KEYBOARD) => Application::Keyboard,
            (UsagePage::GenericDesktop, desktop::KEYPAD) => Application::Keypad,
            (UsagePage::GenericDesktop, desktop::MOUSE) => Application::Mouse,
            (UsagePage::GenericDesktop, desktop::POINTER) => Application::Pointer,
            (UsagePage::GenericDesktop, desktop::SYSTEM_CONTROL) => Application::SystemControl,
            (UsagePage::Consumer, consumer::CONSUMER_CONTROL) => Application::ConsumerControl,
            _ => Application::Other {
                usage_page: self.usage_page,
                usage: self.usage,
            },
        }
    }
}

/// All layouts of one device, partitioned by report type then report ID.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportMap {
    input: BTreeMap<u8, ReportLayout>,
    output: BTreeMap<u8, ReportLayout>,
    feature: BTreeMap<u8, ReportLayout>,
}

impl ReportMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a layout under its type and ID, replacing any earlier one.
    pub fn insert(&mut self, layout: ReportLayout) {
        self.table_mut(layout.report_type)
            .insert(layout.report_id, layout);
    }

    pub fn get(&self, report_type: ReportType, report_id: u8) -> Option<&ReportLayout> {
        self.table(report_type).get(&report_id)
    }

    pub fn input(&self, report_id: u8) -> Option<&ReportLayout> {
        self.get(ReportType::Input, report_id)
    }

    pub fn output(&self, report_id: u8) -> Option<&ReportLayout> {
        self.get(ReportType::Output, report_id)
    }

    pub fn feature(&self, report_id: u8) -> Option<&ReportLayout> {
        self.get(ReportType::Feature, report_id)
    }

    /// Layouts of one type in ascending report ID order.
    pub fn layouts(&self, report_type: ReportType) -> impl Iterator<Item = &ReportLayout> {
        self.table(report_type).values()
    }

    /// `true` if any input report is prefixed with a report ID.
    pub fn uses_report_ids(&self) -> bool {
        self.input.keys().any(|&id| id != 0)
    }

    /// Input layout for a notification's report ID.
    ///
    /// Descriptors without REPORT_ID items register their layout under ID 0,
    /// while the BLE Report Reference may still announce a non-zero ID; in
    /// that case the single ID 0 layout is used.
    pub fn resolve_input(&self, report_id: u8) -> Option<&ReportLayout> {
        self.input(report_id).or_else(|| {
            if self.uses_report_ids() {
                None
            } else {
                self.input(0)
            }
        })
    }

    fn table(&self, report_type: ReportType) -> &BTreeMap<u8, ReportLayout> {
        match report_type {
            ReportType::Input => &self.input,
            ReportType::Output => &self.output,
            ReportType::Feature => &self.feature,
        }
    }

    fn table_mut(&mut self, report_type: ReportType) -> &mut BTreeMap<u8, ReportLayout> {
        match report_type {
            ReportType::Input => &mut self.input,
            ReportType::Output => &mut self.output,
            ReportType::Feature => &mut self.feature,
        }
    }
}
