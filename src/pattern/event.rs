//! Directive events.

use std::fmt;

use crate::core::{
    PatternError, KIND_REPORT, KIND_SET_CWND_ABS, KIND_SET_RATE_ABS, KIND_SET_RATE_REL,
    KIND_WAIT_ABS, KIND_WAIT_REL,
};

/// One typed instruction in a directive sequence.
///
/// Events are immutable once constructed. Each variant carries the single
/// unsigned 32-bit payload of the control-plane encoding; `Report` carries
/// none (its wire value is ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternEvent {
    /// Set the pacing rate to an absolute value, in bytes per second.
    SetRateAbs(u32),
    /// Set the congestion window to an absolute value, in bytes.
    ///
    /// Converted to packets at execution time using the flow's current
    /// segment size (floor division).
    SetCwndAbs(u32),
    /// Scale the current pacing rate by `factor / 100` (floor).
    SetRateRel(u32),
    /// Hold the cursor for an absolute duration, in microseconds.
    WaitAbs(u32),
    /// Hold the cursor for `factor / 100` of the last observed RTT (floor).
    ///
    /// With no RTT sample yet the wait resolves to zero and the next event
    /// fires on the following `advance` call. That is expected, not an error.
    WaitRel(u32),
    /// Drain the measurement accumulator and report it to the control plane.
    Report,
}

impl PatternEvent {
    /// Decode an event from its control-plane `(kind, value)` encoding.
    pub fn from_wire(kind: u8, value: u32) -> Result<Self, PatternError> {
        match kind {
            KIND_SET_RATE_ABS => Ok(Self::SetRateAbs(value)),
            KIND_SET_CWND_ABS => Ok(Self::SetCwndAbs(value)),
            KIND_SET_RATE_REL => Ok(Self::SetRateRel(value)),
            KIND_WAIT_REL => Ok(Self::WaitRel(value)),
            KIND_WAIT_ABS => Ok(Self::WaitAbs(value)),
            KIND_REPORT => Ok(Self::Report),
            other => Err(PatternError::UnknownKind(other)),
        }
    }

    /// Wire kind code for this event.
    pub fn kind(&self) -> u8 {
        match self {
            Self::SetRateAbs(_) => KIND_SET_RATE_ABS,
            Self::SetCwndAbs(_) => KIND_SET_CWND_ABS,
            Self::SetRateRel(_) => KIND_SET_RATE_REL,
            Self::WaitRel(_) => KIND_WAIT_REL,
            Self::WaitAbs(_) => KIND_WAIT_ABS,
            Self::Report => KIND_REPORT,
        }
    }

    /// Wire payload value for this event (zero for `Report`).
    pub fn value(&self) -> u32 {
        match self {
            Self::SetRateAbs(v)
            | Self::SetCwndAbs(v)
            | Self::SetRateRel(v)
            | Self::WaitRel(v)
            | Self::WaitAbs(v) => *v,
            Self::Report => 0,
        }
    }
}

impl fmt::Display for PatternEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetRateAbs(v) => write!(f, "set rate {v} B/s"),
            Self::SetCwndAbs(v) => write!(f, "set cwnd {v} B"),
            Self::SetRateRel(v) => write!(f, "set rate factor {v}/100"),
            Self::WaitRel(v) => write!(f, "wait {v}/100 rtts"),
            Self::WaitAbs(v) => write!(f, "wait {v} us"),
            Self::Report => write!(f, "send report"),
        }
    }
}
