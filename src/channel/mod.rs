//! Outbound control-plane channel.
//!
//! The interpreter produces two fire-and-forget messages: a
//! [`ConnectionCreateRequest`] while disconnected and a
//! [`MeasurementReport`](crate::core::MeasurementReport) on every Report
//! directive. This module carries them as a [`ControlMessage`] over a bounded
//! tokio mpsc queue via [`MpscControlChannel`]; the byte-level framing toward
//! the control-plane process stays with whoever owns the receiving end.

mod message;
mod mpsc;

pub use message::{ConnectionCreateRequest, ControlMessage};
pub use mpsc::MpscControlChannel;
