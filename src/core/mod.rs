//! Core constants, error types, and collaborator traits.
//!
//! Everything the interpreter needs to talk to the outside world lives here:
//! the [`FlowTransport`] seam to the owning transport layer, the
//! [`ControlChannel`] seam to the control plane, and the error taxonomy for
//! the (few) operations that can fail.

mod constants;
mod error;
mod flow;
mod traits;

pub use constants::*;
pub use error::{ChannelError, PatternError};
pub use flow::FlowId;
pub use traits::{ControlChannel, FlowTransport, MeasurementReport};
