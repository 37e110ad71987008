//! Outbound control message types.

use crate::core::{FlowId, MeasurementReport};

/// Request that the control plane (re)associate with a flow and begin
/// issuing directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionCreateRequest {
    /// Flow asking for directives.
    pub flow_id: FlowId,
    /// First unacknowledged sequence number at request time, so the control
    /// plane can correlate its directives with the flow's progress.
    pub correlation_seq: u32,
}

/// One outbound message on the control channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMessage {
    /// Sent while a flow is disconnected.
    ConnectionCreate(ConnectionCreateRequest),
    /// Sent on a Report directive.
    Report(MeasurementReport),
}

impl ControlMessage {
    /// Flow the message belongs to.
    pub fn flow_id(&self) -> FlowId {
        match self {
            Self::ConnectionCreate(req) => req.flow_id,
            Self::Report(report) => report.flow_id,
        }
    }
}
