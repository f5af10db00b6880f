//! Message routing between BLE notifications and the PS/2 host.
//!
//! The BLE stack turns each connection, disconnection and report
//! notification into a [`BridgeEvent`]. The [`Bridge`] routes it to the
//! device's session and hands the resulting scan codes and mouse packets
//! to a [`Ps2Sink`].
//!
//! ```text
//! BLE stack ──BridgeEvent──▶ Bridge ──▶ SessionRegistry ──▶ Ps2Sink
//!                              ▲
//!                   poll() ────┘ (flush coalesced mouse motion)
//! ```

use alloc::vec::Vec;

use embassy_time::Instant;

use crate::config::BridgeConfig;
use crate::error::{Error, Result};
use crate::ps2::Ps2MouseReport;
use crate::session::{DeviceId, Dispatch, SessionRegistry};

/// Output side: the PS/2 keyboard and mouse emitters.
pub trait Ps2Sink {
    /// One make or break sequence, sent to the keyboard port in order.
    fn send_scan_code(&mut self, bytes: &[u8]);

    /// One mouse movement. `packet` is `report` encoded for the configured
    /// protocol.
    fn send_mouse(&mut self, report: Ps2MouseReport, packet: &[u8]);
}

/// Input side: what the BLE stack reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BridgeEvent {
    /// A peripheral connected and its Report Map was read.
    Connected { device: DeviceId, descriptor: Vec<u8> },
    /// A peripheral went away.
    Disconnected { device: DeviceId },
    /// An input report notification. `report_id` comes from the
    /// characteristic's Report Reference descriptor.
    Notification {
        device: DeviceId,
        report_id: u8,
        data: Vec<u8>,
    },
}

pub struct Bridge {
    config: BridgeConfig,
    sessions: SessionRegistry,
}

impl Bridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            sessions: SessionRegistry::new(config.max_devices),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Open a session for `device` from its Report Map.
    pub fn connect(&mut self, device: DeviceId, descriptor: &[u8]) -> Result<()> {
        match self.sessions.connect(device, descriptor) {
            Ok(session) => {
                let inputs = session
                    .report_map()
                    .layouts(crate::hid::ReportType::Input)
                    .count();
                info!("{} connected: {} input reports", device, inputs);
                Ok(())
            }
            Err(e) => {
                warn!("{} rejected: {}", device, e);
                Err(e)
            }
        }
    }

    /// Drop all state of `device`. Returns `false` if it was not connected.
    pub fn disconnect(&mut self, device: DeviceId) -> bool {
        let known = self.sessions.disconnect(device);
        if known {
            info!("{} disconnected", device);
        }
        known
    }

    /// Decode, translate and emit one input report.
    pub fn handle_notification<S: Ps2Sink>(
        &mut self,
        device: DeviceId,
        report_id: u8,
        data: &[u8],
        now: Instant,
        sink: &mut S,
    ) -> Result<Dispatch> {
        let session = self
            .sessions
            .get_mut(device)
            .ok_or(Error::UnknownDevice)?;
        let dispatch = session.dispatch(report_id, data, now, &self.config)?;

        match &dispatch {
            Dispatch::Keyboard(translation) => {
                for event in &translation.events {
                    sink.send_scan_code(event.bytes());
                }
            }
            Dispatch::Mouse(Some(report)) => self.send_mouse(*report, sink),
            Dispatch::Mouse(None) | Dispatch::Ignored => {}
        }
        Ok(dispatch)
    }

    /// Flush mouse motion left in coalescers whose interval has elapsed.
    /// Returns the number of reports emitted.
    pub fn poll<S: Ps2Sink>(&mut self, now: Instant, sink: &mut S) -> usize {
        let mut pending: Vec<Ps2MouseReport> = Vec::new();
        for (_, session) in self.sessions.iter_mut() {
            pending.extend(session.flush(now));
        }
        for report in &pending {
            self.send_mouse(*report, sink);
        }
        pending.len()
    }

    /// When [`poll`](Self::poll) next has something to flush.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.sessions
            .devices()
            .filter_map(|device| self.sessions.get(device)?.deadline())
            .min()
    }

    /// Apply one event. Notifications return their [`Dispatch`].
    pub fn handle_event<S: Ps2Sink>(
        &mut self,
        event: BridgeEvent,
        now: Instant,
        sink: &mut S,
    ) -> Result<Option<Dispatch>> {
        match event {
            BridgeEvent::Connected { device, descriptor } => {
                self.connect(device, &descriptor)?;
                Ok(None)
            }
            BridgeEvent::Disconnected { device } => {
                self.disconnect(device);
                Ok(None)
            }
            BridgeEvent::Notification {
                device,
                report_id,
                data,
            } => self
                .handle_notification(device, report_id, &data, now, sink)
                .map(Some),
        }
    }

    fn send_mouse<S: Ps2Sink>(&self, report: Ps2MouseReport, sink: &mut S) {
        for part in report.split(self.config.mouse_protocol) {
            sink.send_mouse(part, &part.encode(self.config.mouse_protocol));
        }
    }
}

/// Drive a [`Bridge`] from a channel of [`BridgeEvent`]s.
///
/// Waits for the next event or the next coalescer deadline, whichever
/// comes first. Errors are logged and the loop keeps running.
#[cfg(feature = "embassy")]
pub async fn bridge_task<M, S, const N: usize>(
    bridge: &mut Bridge,
    events: embassy_sync::channel::Receiver<'_, M, BridgeEvent, N>,
    sink: &mut S,
) -> !
where
    M: embassy_sync::blocking_mutex::raw::RawMutex,
    S: Ps2Sink,
{
    use embassy_futures::select::{select, Either};
    use embassy_time::Timer;

    loop {
        let wake = bridge
            .next_deadline()
            .unwrap_or_else(|| Instant::now() + bridge.config().mouse_min_interval);

        match select(events.receive(), Timer::at(wake)).await {
            Either::First(event) => {
                if let Err(e) = bridge.handle_event(event, Instant::now(), sink) {
                    warn!("bridge: {}", e);
                }
            }
            Either::Second(()) => {
                bridge.poll(Instant::now(), sink);
            }
        }
    }
}
