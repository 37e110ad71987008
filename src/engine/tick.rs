//! Wrapping 32-bit timestamps.

/// A monotonic timestamp in clock ticks, wrapping at 32 bits.
///
/// Comparison uses the signed-difference trick from TCP sequence-number
/// arithmetic, so ordering stays correct across the wrap as long as two
/// compared timestamps are less than half the counter range apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tick(u32);

impl Tick {
    /// Create a tick from its raw counter value.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw counter value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether `self` is strictly after `other`, tolerating wraparound.
    pub const fn happens_after(self, other: Tick) -> bool {
        self.0.wrapping_sub(other.0) as i32 > 0
    }

    /// Add a tick count, wrapping at the counter boundary.
    pub const fn wrapping_add(self, ticks: u32) -> Tick {
        Self(self.0.wrapping_add(ticks))
    }
}
