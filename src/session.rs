//! Per-device bridge state.
//!
//! Each connected peripheral owns its parsed [`ReportMap`] and, per input
//! report ID, either a [`KeyboardTranslator`] or a [`MouseCoalescer`].
//! Translators and coalescers are created on the first notification for
//! their report ID. Everything is dropped when the device disconnects.

use alloc::collections::BTreeMap;
use core::fmt;

use embassy_time::Instant;

use crate::config::BridgeConfig;
use crate::error::{Error, Result};
use crate::hid::{decode_keyboard, decode_mouse, ReportMap};
use crate::ps2::{KeyboardTranslator, MouseCoalescer, Ps2MouseReport, Translation};

/// BLE device address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId(pub [u8; 6]);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Most significant byte first, as BLE addresses are usually written.
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{g:02X}:{e:02X}:{d:02X}:{c:02X}:{b:02X}:{a:02X}")
    }
}

/// What one notification turned into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Keyboard-like report: scan codes sent, misses skipped.
    Keyboard(Translation),
    /// Mouse report: `Some` if the coalescer emitted.
    Mouse(Option<Ps2MouseReport>),
    /// The report's application collection is neither keyboard nor mouse.
    Ignored,
}

/// State of one connected peripheral.
#[derive(Debug)]
pub struct DeviceSession {
    map: ReportMap,
    keyboards: BTreeMap<u8, KeyboardTranslator>,
    mice: BTreeMap<u8, MouseCoalescer>,
}

impl DeviceSession {
    pub fn new(map: ReportMap) -> Self {
        Self {
            map,
            keyboards: BTreeMap::new(),
            mice: BTreeMap::new(),
        }
    }

    pub fn report_map(&self) -> &ReportMap {
        &self.map
    }

    pub fn keyboard(&self, report_id: u8) -> Option<&KeyboardTranslator> {
        self.keyboards.get(&report_id)
    }

    pub fn mouse(&self, report_id: u8) -> Option<&MouseCoalescer> {
        self.mice.get(&report_id)
    }

    /// Decode one input report and run it through its translator or
    /// coalescer. Returns the keyboard translation or the coalesced mouse
    /// report, not yet split into packets.
    pub fn dispatch(
        &mut self,
        report_id: u8,
        data: &[u8],
        now: Instant,
        config: &BridgeConfig,
    ) -> Result<Dispatch> {
        let layout = self
            .map
            .resolve_input(report_id)
            .ok_or(Error::UnknownReport(report_id))?;
        let key = layout.report_id;
        let application = layout.application();

        if application.is_keyboard_like() {
            let decoded = decode_keyboard(data, layout);
            let translator = self
                .keyboards
                .entry(key)
                .or_insert_with(|| KeyboardTranslator::new(config.scan_code_set));
            Ok(Dispatch::Keyboard(translator.translate(decoded.state)))
        } else if application.is_pointer_like() {
            let decoded = decode_mouse(data, layout);
            let coalescer = self
                .mice
                .entry(key)
                .or_insert_with(|| MouseCoalescer::new(config.mouse_min_interval, now));
            Ok(Dispatch::Mouse(coalescer.push(decoded.state, now)))
        } else {
            debug!("report {} ignored: {:?}", report_id, application);
            Ok(Dispatch::Ignored)
        }
    }

    /// Flush every coalescer whose interval has elapsed.
    pub fn flush(&mut self, now: Instant) -> impl Iterator<Item = Ps2MouseReport> + '_ {
        self.mice
            .values_mut()
            .filter_map(move |coalescer| coalescer.flush(now))
    }

    /// Earliest coalescer flush deadline.
    pub fn deadline(&self) -> Option<Instant> {
        self.mice.values().filter_map(MouseCoalescer::deadline).min()
    }
}

/// All connected peripherals, bounded by a session limit.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: BTreeMap<DeviceId, DeviceSession>,
    max_devices: usize,
}

impl SessionRegistry {
    pub fn new(max_devices: usize) -> Self {
        Self {
            sessions: BTreeMap::new(),
            max_devices,
        }
    }

    pub fn max_devices(&self) -> usize {
        self.max_devices
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Parse `descriptor` and open a session. A device that is already
    /// connected has its session replaced. A malformed descriptor leaves no
    /// session behind.
    pub fn connect(&mut self, device: DeviceId, descriptor: &[u8]) -> Result<&mut DeviceSession> {
        let map = ReportMap::parse(descriptor)?;
        self.insert(device, map)
    }

    /// Open a session with an already parsed report map.
    pub fn insert(&mut self, device: DeviceId, map: ReportMap) -> Result<&mut DeviceSession> {
        if !self.sessions.contains_key(&device) && self.sessions.len() >= self.max_devices {
            return Err(Error::TooManyDevices);
        }
        self.sessions.remove(&device);
        Ok(self
            .sessions
            .entry(device)
            .or_insert_with(|| DeviceSession::new(map)))
    }

    /// Drop a device's session. Returns `false` if it had none.
    pub fn disconnect(&mut self, device: DeviceId) -> bool {
        self.sessions.remove(&device).is_some()
    }

    pub fn get(&self, device: DeviceId) -> Option<&DeviceSession> {
        self.sessions.get(&device)
    }

    pub fn get_mut(&mut self, device: DeviceId) -> Option<&mut DeviceSession> {
        self.sessions.get_mut(&device)
    }

    pub fn devices(&self) -> impl Iterator<Item = DeviceId> + '_ {
        self.sessions.keys().copied()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (DeviceId, &mut DeviceSession)> {
        self.sessions.iter_mut().map(|(id, session)| (*id, session))
    }
}
