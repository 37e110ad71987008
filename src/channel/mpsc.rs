//! Non-blocking control channel over a bounded tokio mpsc queue.

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::mpsc::{self, Receiver, Sender};

use super::message::{ConnectionCreateRequest, ControlMessage};
use crate::core::{ChannelError, ControlChannel, FlowId, MeasurementReport};

/// Default outbound queue depth.
pub const DEFAULT_QUEUE_DEPTH: usize = 256;

/// [`ControlChannel`] implementation that hands messages to an in-process
/// consumer task over a bounded mpsc queue.
///
/// Sends use `try_send` and never block: a full queue drops the message and
/// reports [`ChannelError::Backlogged`], a gone consumer reports
/// [`ChannelError::Closed`]. The consumer owns the framing and the socket
/// toward the control-plane process.
#[derive(Debug, Clone)]
pub struct MpscControlChannel {
    tx: Sender<ControlMessage>,
}

impl MpscControlChannel {
    /// Create a channel with the default queue depth.
    ///
    /// Returns the sender half (to hand to interpreters) and the receiver
    /// half (to hand to the consumer task).
    pub fn new() -> (Self, Receiver<ControlMessage>) {
        Self::with_depth(DEFAULT_QUEUE_DEPTH)
    }

    /// Create a channel with an explicit queue depth.
    pub fn with_depth(depth: usize) -> (Self, Receiver<ControlMessage>) {
        let (tx, rx) = mpsc::channel(depth);
        (Self { tx }, rx)
    }

    fn push(&self, msg: ControlMessage) -> Result<(), ChannelError> {
        self.tx.try_send(msg).map_err(|err| match err {
            TrySendError::Full(_) => ChannelError::Backlogged,
            TrySendError::Closed(_) => ChannelError::Closed,
        })
    }
}

impl ControlChannel for MpscControlChannel {
    fn request_connection(&self, flow_id: FlowId, correlation_seq: u32) -> Result<(), ChannelError> {
        self.push(ControlMessage::ConnectionCreate(ConnectionCreateRequest {
            flow_id,
            correlation_seq,
        }))
    }

    fn send_report(&self, report: MeasurementReport) -> Result<(), ChannelError> {
        self.push(ControlMessage::Report(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_arrive_in_order() {
        let (channel, mut rx) = MpscControlChannel::new();

        channel.request_connection(FlowId::new(1), 500).unwrap();
        channel
            .send_report(MeasurementReport {
                flow_id: FlowId::new(1),
                rtt_us: 10_000,
                bytes_in: 1,
                bytes_out: 2,
                loss_count: 0,
            })
            .unwrap();

        match rx.try_recv().unwrap() {
            ControlMessage::ConnectionCreate(req) => {
                assert_eq!(req.flow_id, FlowId::new(1));
                assert_eq!(req.correlation_seq, 500);
            }
            other => panic!("expected connection request, got {other:?}"),
        }
        match rx.try_recv().unwrap() {
            ControlMessage::Report(report) => assert_eq!(report.rtt_us, 10_000),
            other => panic!("expected report, got {other:?}"),
        }
    }

    #[test]
    fn test_full_queue_drops_without_blocking() {
        let (channel, _rx) = MpscControlChannel::with_depth(1);

        channel.request_connection(FlowId::new(2), 0).unwrap();
        let err = channel.request_connection(FlowId::new(2), 1).unwrap_err();
        assert_eq!(err, ChannelError::Backlogged);
    }

    #[test]
    fn test_closed_consumer_reported() {
        let (channel, rx) = MpscControlChannel::with_depth(4);
        drop(rx);

        let err = channel.request_connection(FlowId::new(3), 0).unwrap_err();
        assert_eq!(err, ChannelError::Closed);
    }
}
