//! The pattern interpreter and its timebase.
//!
//! - [`Tick`]: wrapping 32-bit monotonic timestamps with happens-after
//!   comparison (same signed-difference trick as TCP sequence numbers)
//! - [`PatternClock`] / [`InstantClock`]: the clock seam and its default
//!   microsecond implementation
//! - [`FlowInterpreter`]: per-flow install/advance state machine
//!
//! # State machine
//!
//! A flow is **Disconnected** until the control plane installs a directive
//! sequence, then **Active** forever after: reinstallation replaces one
//! active sequence with another, and flow teardown happens outside this
//! crate. While disconnected every `advance` call requests a connection;
//! while active the interpreter walks the sequence circularly, one event per
//! elapsed deadline.

mod clock;
mod interpreter;
mod tick;

pub use clock::{InstantClock, PatternClock};
pub use interpreter::FlowInterpreter;
pub use tick::Tick;
