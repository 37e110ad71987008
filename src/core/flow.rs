//! Flow identity.

use std::fmt;

/// Opaque per-flow correlation handle.
///
/// Assigned by whoever creates the flow; echoed verbatim in every outbound
/// control message so the control plane can route directives and reports to
/// the right flow. The interpreter never interprets the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlowId(u32);

impl FlowId {
    /// Create a flow identifier from its raw index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw index value.
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flow#{}", self.0)
    }
}
