//! # flowpattern
//!
//! A per-flow **directive pattern execution engine** for externally-programmed
//! congestion control.
//!
//! An external control plane computes an ordered, cyclic sequence of
//! directives (set a pacing rate, set a congestion window, wait, report
//! measurements) and installs it on a flow. This crate interprets that
//! sequence from inside the flow's per-packet processing path:
//!
//! - **Non-blocking**: [`FlowInterpreter::advance`] is O(1), never waits, and
//!   never allocates on the hot path
//! - **Wraparound-safe**: deadlines use 32-bit wrapping timestamps compared
//!   with the same signed-difference trick as TCP sequence numbers
//! - **Race-safe**: a new sequence may be installed from the control-plane
//!   context while an `advance` is in flight; the sequence/cursor/deadline
//!   triple is always swapped as a unit
//! - **Degradation-tolerant**: an unreachable control plane leaves the flow
//!   in a quiet Disconnected state, never a failed one
//!
//! ## Modules
//!
//! - [`core`]: constants, error types, and collaborator traits
//! - [`pattern`]: directive events and the shared directive sequence
//! - [`engine`]: wrapping timestamps, clocks, and the interpreter itself
//! - [`measure`]: the drainable per-flow measurement accumulator
//! - [`channel`]: outbound control messages and the mpsc channel adapter
//!   (requires the `channel` feature)
//!
//! ## Example
//!
//! ```rust
//! use flowpattern::prelude::*;
//!
//! # struct Knobs { mss: u32, cwnd: u32, rate: u32 }
//! # impl FlowTransport for Knobs {
//! #     fn segment_size(&self) -> u32 { self.mss }
//! #     fn first_unacked_seq(&self) -> u32 { 0 }
//! #     fn set_congestion_window(&mut self, packets: u32) { self.cwnd = packets; }
//! #     fn set_pacing_rate(&mut self, bytes_per_sec: u32) { self.rate = bytes_per_sec; }
//! # }
//! # struct Nowhere;
//! # impl ControlChannel for Nowhere {
//! #     fn request_connection(&self, _: FlowId, _: u32) -> Result<(), ChannelError> { Ok(()) }
//! #     fn send_report(&self, _: MeasurementReport) -> Result<(), ChannelError> { Ok(()) }
//! # }
//! let clock = InstantClock::new();
//! let mut transport = Knobs { mss: 1460, cwnd: 10, rate: 0 };
//! let flow = FlowInterpreter::new(FlowId::new(7), Nowhere);
//!
//! // Control plane hands down: rate 125000 B/s, wait two RTTs, report.
//! let sequence = DirectiveSequence::new(vec![
//!     PatternEvent::SetRateAbs(125_000),
//!     PatternEvent::WaitRel(200),
//!     PatternEvent::Report,
//! ]);
//! flow.install_pattern(sequence, &mut transport, &clock);
//!
//! // Every ack for the flow then drives the interpreter forward.
//! std::thread::sleep(std::time::Duration::from_micros(10));
//! flow.advance(&mut transport, &clock);
//! assert_eq!(flow.current_rate(), 125_000);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core module (always included)
pub mod core;

// Directive data model
pub mod pattern;

// Interpreter and clocks
pub mod engine;

// Measurement accumulator
pub mod measure;

// Control channel adapter (feature-gated)
#[cfg(feature = "channel")]
#[cfg_attr(docsrs, doc(cfg(feature = "channel")))]
pub mod channel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::engine::{FlowInterpreter, InstantClock, PatternClock, Tick};
    pub use crate::measure::{MeasurementAccumulator, MeasurementSnapshot};
    pub use crate::pattern::{DirectiveSequence, PatternEvent};

    #[cfg(feature = "channel")]
    pub use crate::channel::{ConnectionCreateRequest, ControlMessage, MpscControlChannel};
}

// Re-export commonly used items at crate root
pub use crate::core::{
    ChannelError, ControlChannel, FlowId, FlowTransport, MeasurementReport, PatternError,
};
pub use engine::{FlowInterpreter, InstantClock, PatternClock, Tick};
pub use measure::{MeasurementAccumulator, MeasurementSnapshot};
pub use pattern::{DirectiveSequence, PatternEvent};
