//! Collaborator traits at the engine's two seams.
//!
//! The interpreter owns no sockets and no transport state. It reaches the
//! flow's congestion knobs through [`FlowTransport`] and the control plane
//! through [`ControlChannel`]; both are supplied by the embedding transport
//! layer on every call or at construction.

use super::error::ChannelError;
use super::flow::FlowId;
use crate::measure::MeasurementSnapshot;

/// Seam to the transport/session layer that owns a flow's congestion state.
///
/// # Requirements
///
/// - `segment_size` MUST return a non-zero value (windows are converted to
///   packet counts by floor division)
/// - All four operations MUST be non-blocking; they run inside the flow's
///   per-packet processing path
pub trait FlowTransport {
    /// Current maximum segment size for the flow, in bytes.
    fn segment_size(&self) -> u32;

    /// First unacknowledged sequence number.
    ///
    /// Used as correlation context in connection requests so the control
    /// plane can line its directives up with the flow's progress.
    fn first_unacked_seq(&self) -> u32;

    /// Set the flow's congestion window, in packets.
    fn set_congestion_window(&mut self, packets: u32);

    /// Set the flow's pacing rate, in bytes per second.
    fn set_pacing_rate(&mut self, bytes_per_sec: u32);
}

/// Measurement report delivered to the control plane on a Report directive.
///
/// Values are the drained accumulator contents; see
/// [`MeasurementAccumulator::drain`](crate::measure::MeasurementAccumulator::drain).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementReport {
    /// Flow the report belongs to.
    pub flow_id: FlowId,
    /// Last observed round-trip time, in microseconds.
    pub rtt_us: u32,
    /// Bytes received since the previous report.
    pub bytes_in: u64,
    /// Bytes sent since the previous report.
    pub bytes_out: u64,
    /// Losses detected since the previous report.
    pub loss_count: u32,
}

impl MeasurementReport {
    /// Build a report from a drained measurement snapshot.
    pub fn from_snapshot(flow_id: FlowId, snapshot: MeasurementSnapshot) -> Self {
        Self {
            flow_id,
            rtt_us: snapshot.rtt_us,
            bytes_in: snapshot.bytes_in,
            bytes_out: snapshot.bytes_out,
            loss_count: snapshot.loss_count,
        }
    }
}

/// Outbound seam to the control plane.
///
/// Both operations are fire-and-forget: the synchronous result says whether
/// the message left this process, not whether it was delivered. The
/// interpreter only ever logs a failure; it takes no corrective action.
///
/// # Requirements
///
/// - Implementations MUST NOT block; `advance` runs on the per-packet path
pub trait ControlChannel {
    /// Ask the control plane to (re)associate with this flow and start
    /// issuing directives.
    fn request_connection(&self, flow_id: FlowId, correlation_seq: u32) -> Result<(), ChannelError>;

    /// Deliver a measurement report.
    fn send_report(&self, report: MeasurementReport) -> Result<(), ChannelError>;
}
