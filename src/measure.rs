//! Per-flow measurement accumulation.
//!
//! The transport's sampling path (ack processing, loss detection) feeds a
//! [`MeasurementAccumulator`] continuously; the interpreter's Report action
//! drains it atomically and ships the resulting [`MeasurementSnapshot`]
//! upstream. All fields are atomics so the sampling path and the Report
//! handler never contend on a lock.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Drained totals since the previous report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeasurementSnapshot {
    /// Last observed round-trip time, in microseconds.
    pub rtt_us: u32,
    /// Bytes received.
    pub bytes_in: u64,
    /// Bytes sent.
    pub bytes_out: u64,
    /// Losses detected.
    pub loss_count: u32,
}

/// Continuously updated flow measurements with atomic read-then-zero drain.
///
/// Writers: the flow's sampling path (one writer per flow, same exclusion
/// guarantee as `advance`). Reader: the Report handler, plus the WaitRel
/// handler which reads the RTT without draining.
#[derive(Debug, Default)]
pub struct MeasurementAccumulator {
    rtt_us: AtomicU32,
    bytes_in: AtomicU64,
    bytes_out: AtomicU64,
    loss_count: AtomicU32,
}

impl MeasurementAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an RTT sample, in microseconds. Keeps the latest sample.
    pub fn record_rtt(&self, rtt_us: u32) {
        self.rtt_us.store(rtt_us, Ordering::Release);
    }

    /// Add received bytes.
    pub fn add_bytes_in(&self, bytes: u64) {
        self.bytes_in.fetch_add(bytes, Ordering::AcqRel);
    }

    /// Add sent bytes.
    pub fn add_bytes_out(&self, bytes: u64) {
        self.bytes_out.fetch_add(bytes, Ordering::AcqRel);
    }

    /// Count detected losses.
    pub fn add_loss(&self, count: u32) {
        self.loss_count.fetch_add(count, Ordering::AcqRel);
    }

    /// Last recorded RTT in microseconds, without draining.
    ///
    /// Zero until the first sample arrives.
    pub fn last_rtt_us(&self) -> u32 {
        self.rtt_us.load(Ordering::Acquire)
    }

    /// Atomically read and zero every field.
    pub fn drain(&self) -> MeasurementSnapshot {
        MeasurementSnapshot {
            rtt_us: self.rtt_us.swap(0, Ordering::AcqRel),
            bytes_in: self.bytes_in.swap(0, Ordering::AcqRel),
            bytes_out: self.bytes_out.swap(0, Ordering::AcqRel),
            loss_count: self.loss_count.swap(0, Ordering::AcqRel),
        }
    }
}
