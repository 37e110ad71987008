//! Protocol constants shared with the control plane.
//!
//! The directive kind codes are fixed by the control-plane encoding and MUST
//! NOT be changed.

// =============================================================================
// DIRECTIVE KIND CODES (control-plane wire encoding)
// =============================================================================

/// Set the pacing rate to an absolute value in bytes per second.
pub const KIND_SET_RATE_ABS: u8 = 0x00;

/// Set the congestion window to an absolute value in bytes.
pub const KIND_SET_CWND_ABS: u8 = 0x01;

/// Scale the current pacing rate by a factor expressed in hundredths.
pub const KIND_SET_RATE_REL: u8 = 0x02;

/// Wait for a multiple of the last observed RTT, in hundredths.
pub const KIND_WAIT_REL: u8 = 0x03;

/// Wait for an absolute duration in microseconds.
pub const KIND_WAIT_ABS: u8 = 0x04;

/// Drain the measurement accumulator and report it upstream.
pub const KIND_REPORT: u8 = 0x05;

// =============================================================================
// SCALING
// =============================================================================

/// Denominator for relative-factor directives (SetRateRel, WaitRel).
///
/// A value of 150 means "1.5x"; 33 means "0.33x" (floor arithmetic).
pub const REL_FACTOR_SCALE: u64 = 100;

/// Interpreter ticks per microsecond for the default [`InstantClock`].
///
/// [`InstantClock`]: crate::engine::InstantClock
pub const TICKS_PER_MICRO: u32 = 1;
