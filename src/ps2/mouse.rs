//! Rate limiting for one mouse report stream.
//!
//! BLE mice report far faster than a PS/2 link can drain. Reports that carry
//! only motion are buffered and their deltas summed into the next emitted
//! report, so motion is delayed but never lost. A button or wheel change is
//! emitted at once.

use embassy_time::{Duration, Instant};
use heapless::Deque;

use super::packet::Ps2MouseReport;
use crate::config::MOUSE_BUFFER_CAPACITY;
use crate::hid::MouseState;

/// Coalesces the reports of one (device, report ID) stream.
///
/// `N` bounds how many reports can be deferred before a forced emission.
#[derive(Debug)]
pub struct MouseCoalescer<const N: usize = MOUSE_BUFFER_CAPACITY> {
    min_interval: Duration,
    buffer: Deque<MouseState, N>,
    last_emit: Instant,
    last_seen: MouseState,
}

impl MouseCoalescer {
    /// Coalescer with the default buffer size. `now` counts as the last
    /// emission.
    pub fn new(min_interval: Duration, now: Instant) -> Self {
        Self::with_buffer(min_interval, now)
    }
}

impl<const N: usize> MouseCoalescer<N> {
    pub fn with_buffer(min_interval: Duration, now: Instant) -> Self {
        Self {
            min_interval,
            buffer: Deque::new(),
            last_emit: now,
            last_seen: MouseState::default(),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Number of deferred reports.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// When [`flush`](Self::flush) will next emit, if anything is buffered.
    pub fn deadline(&self) -> Option<Instant> {
        (!self.buffer.is_empty()).then(|| self.last_emit + self.min_interval)
    }

    /// Feed one decoded report.
    ///
    /// Emits when the minimum interval has passed since the last emission,
    /// when the buffer is full, or when buttons or the wheel differ from the
    /// previous report. Otherwise the report is buffered. PS/2 packets have
    /// no horizontal wheel, so `pan` is ignored.
    pub fn push(&mut self, state: MouseState, now: Instant) -> Option<Ps2MouseReport> {
        let changed =
            state.buttons != self.last_seen.buttons || state.wheel != self.last_seen.wheel;
        self.last_seen = state;

        if changed || self.buffer.is_full() || self.elapsed(now) >= self.min_interval {
            return Some(self.emit(state, now));
        }

        // Not full, checked above.
        let _ = self.buffer.push_back(state);
        None
    }

    /// Emit the buffered motion once the interval has passed with no new
    /// report to carry it.
    pub fn flush(&mut self, now: Instant) -> Option<Ps2MouseReport> {
        if self.elapsed(now) < self.min_interval {
            return None;
        }
        let last = self.buffer.pop_back()?;
        Some(self.emit(last, now))
    }

    fn elapsed(&self, now: Instant) -> Duration {
        now.checked_duration_since(self.last_emit)
            .unwrap_or(Duration::from_ticks(0))
    }

    /// Sum buffered motion into `trigger`. Wheel and buttons come from
    /// `trigger` alone.
    fn emit(&mut self, trigger: MouseState, now: Instant) -> Ps2MouseReport {
        let mut report = Ps2MouseReport::from(trigger);
        let merged = self.buffer.len();
        for buffered in self.buffer.iter() {
            report.dx = report.dx.saturating_add(buffered.x);
            report.dy = report.dy.saturating_add(buffered.y);
        }
        self.buffer.clear();
        self.last_emit = now;
        trace!(
            "mouse: emit dx={} dy={} wheel={} buttons={} ({} merged)",
            report.dx,
            report.dy,
            report.wheel,
            report.buttons,
            merged
        );
        report
    }
}
