//! Per-flow directive interpreter.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use super::clock::PatternClock;
use super::tick::Tick;
use crate::core::{
    ControlChannel, FlowId, FlowTransport, MeasurementReport, REL_FACTOR_SCALE,
};
use crate::measure::MeasurementAccumulator;
use crate::pattern::{DirectiveSequence, PatternEvent};

/// The installed sequence together with its execution position.
///
/// Swapped as a single unit on reinstall so an `advance` racing an install
/// can never pair a new sequence with an old cursor.
struct ActivePattern {
    sequence: DirectiveSequence,
    /// Index of the most recently executed event; always `< sequence.len()`.
    cursor: usize,
    /// No event fires until the clock passes this tick.
    next_deadline: Tick,
}

struct InterpreterState {
    active: Option<ActivePattern>,
    /// Pacing rate last programmed by SetRateAbs/SetRateRel, in bytes/sec.
    current_rate: u32,
}

/// Per-flow pattern execution engine.
///
/// Owns the interpreter state for one flow: the active [`DirectiveSequence`],
/// the cursor and deadline that drive it, and the flow's
/// [`MeasurementAccumulator`]. The embedding transport calls
/// [`advance`](Self::advance) from its per-packet processing (typically once
/// per acknowledgment); the control-plane response path calls
/// [`install_pattern`](Self::install_pattern), possibly concurrently.
///
/// A flow starts **Disconnected** (no sequence; every `advance` requests a
/// connection) and becomes **Active** on the first install. There is no way
/// back: reinstallation replaces one active sequence with another, and flow
/// teardown drops the interpreter wholesale.
pub struct FlowInterpreter<C> {
    flow_id: FlowId,
    channel: C,
    state: Mutex<InterpreterState>,
    measurement: MeasurementAccumulator,
}

impl<C: ControlChannel> FlowInterpreter<C> {
    /// Create the interpreter for a new flow, initially disconnected.
    pub fn new(flow_id: FlowId, channel: C) -> Self {
        Self {
            flow_id,
            channel,
            state: Mutex::new(InterpreterState {
                active: None,
                current_rate: 0,
            }),
            measurement: MeasurementAccumulator::new(),
        }
    }

    /// Flow this interpreter belongs to.
    pub fn flow_id(&self) -> FlowId {
        self.flow_id
    }

    /// The flow's measurement accumulator, for the transport's sampling path.
    pub fn measurement(&self) -> &MeasurementAccumulator {
        &self.measurement
    }

    /// Pacing rate last programmed by a rate directive, in bytes per second.
    pub fn current_rate(&self) -> u32 {
        self.lock_state().current_rate
    }

    /// Whether a directive sequence is installed.
    pub fn is_active(&self) -> bool {
        self.lock_state().active.is_some()
    }

    /// Index of the most recently executed event, if a sequence is installed.
    pub fn cursor(&self) -> Option<usize> {
        self.lock_state().active.as_ref().map(|a| a.cursor)
    }

    fn lock_state(&self) -> MutexGuard<'_, InterpreterState> {
        // The triple is swapped whole under this lock, so a panicking holder
        // cannot leave it torn; keep serving after poison.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install a directive sequence, replacing any active one.
    ///
    /// The sequence, cursor, and deadline change as one atomic unit. The
    /// cursor starts at `len - 1` so the first `advance` past the deadline
    /// wraps to index 0 and event 0 fires first instead of being skipped;
    /// `advance` is invoked once before returning so that first action is
    /// not held until the next network event.
    ///
    /// The installer is trusted to supply a non-empty sequence (use
    /// [`DirectiveSequence::from_wire`] to validate untrusted input).
    pub fn install_pattern<T, K>(&self, sequence: DirectiveSequence, transport: &mut T, clock: &K)
    where
        T: FlowTransport,
        K: PatternClock,
    {
        info!(flow = %self.flow_id, events = sequence.len(), "installed pattern: {sequence}");

        {
            let mut state = self.lock_state();
            let cursor = sequence.len() - 1;
            state.active = Some(ActivePattern {
                sequence,
                cursor,
                next_deadline: clock.now(),
            });
        }

        self.advance(transport, clock);
    }

    /// Drive the interpreter one step.
    ///
    /// Called at high frequency from the flow's per-packet processing; O(1),
    /// never blocks, and allocates nothing. Disconnected flows request a
    /// connection (re-sent on every call, no backoff); active flows fire the
    /// next event once the deadline has passed and otherwise return
    /// untouched.
    ///
    /// Callers guarantee that no two `advance` calls for the same flow run
    /// concurrently; a concurrent [`install_pattern`](Self::install_pattern)
    /// is safe.
    pub fn advance<T, K>(&self, transport: &mut T, clock: &K)
    where
        T: FlowTransport,
        K: PatternClock,
    {
        let mut state = self.lock_state();

        let Some(active) = state.active.as_mut() else {
            drop(state);
            // Try contacting the control plane again, correlated by the
            // first ack we expect.
            let seq = transport.first_unacked_seq();
            if let Err(err) = self.channel.request_connection(self.flow_id, seq) {
                warn!(flow = %self.flow_id, %err, "failed to send connection request");
            }
            return;
        };

        let now = clock.now();
        if !now.happens_after(active.next_deadline) {
            return;
        }

        active.cursor = (active.cursor + 1) % active.sequence.len();
        debug!(flow = %self.flow_id, cursor = active.cursor, "pattern event");
        let event = active.sequence[active.cursor];

        self.execute(&mut state, event, now, transport, clock);
    }

    /// Execute one directive. Synchronous, bounded time, never fails: send
    /// errors are logged and swallowed.
    fn execute<T, K>(
        &self,
        state: &mut InterpreterState,
        event: PatternEvent,
        now: Tick,
        transport: &mut T,
        clock: &K,
    ) where
        T: FlowTransport,
        K: PatternClock,
    {
        match event {
            PatternEvent::SetRateAbs(rate) => {
                debug!(flow = %self.flow_id, rate, "rate (B/s)");
                state.current_rate = rate;
                transport.set_pacing_rate(rate);
            }
            PatternEvent::SetCwndAbs(cwnd_bytes) => {
                // Translate the byte-denominated window into packets.
                let mss = transport.segment_size();
                let packets = cwnd_bytes / mss;
                debug!(flow = %self.flow_id, cwnd_bytes, packets, mss, "cwnd");
                transport.set_congestion_window(packets);
            }
            PatternEvent::SetRateRel(factor) => {
                // Widened multiply: factor * rate cannot overflow 64 bits.
                let scaled =
                    u64::from(state.current_rate) * u64::from(factor) / REL_FACTOR_SCALE;
                let rate = u32::try_from(scaled).unwrap_or(u32::MAX);
                debug!(flow = %self.flow_id, factor, rate, "rate scaled");
                state.current_rate = rate;
                transport.set_pacing_rate(rate);
            }
            PatternEvent::WaitAbs(wait_us) => {
                debug!(flow = %self.flow_id, wait_us, "waiting");
                let ticks = clock.ticks_from_micros(u64::from(wait_us));
                self.set_deadline(state, now.wrapping_add(ticks));
            }
            PatternEvent::WaitRel(factor) => {
                let rtt_us = u64::from(self.measurement.last_rtt_us());
                let wait_us = rtt_us * u64::from(factor) / REL_FACTOR_SCALE;
                debug!(flow = %self.flow_id, wait_us, factor, rtt_us, "waiting relative");
                let ticks = clock.ticks_from_micros(wait_us);
                self.set_deadline(state, now.wrapping_add(ticks));
            }
            PatternEvent::Report => {
                debug!(flow = %self.flow_id, "sending report");
                let snapshot = self.measurement.drain();
                let report = MeasurementReport::from_snapshot(self.flow_id, snapshot);
                if let Err(err) = self.channel.send_report(report) {
                    warn!(flow = %self.flow_id, %err, "failed to send report");
                }
            }
        }
    }

    fn set_deadline(&self, state: &mut InterpreterState, deadline: Tick) {
        if let Some(active) = state.active.as_mut() {
            active.next_deadline = deadline;
        }
    }
}
