//! Clock seam for the interpreter.

use std::time::Instant;

use super::tick::Tick;
use crate::core::TICKS_PER_MICRO;

/// Source of the interpreter's timebase.
///
/// The engine never reads wall-clock time directly; deadlines come from this
/// trait so embedders can supply the transport's own tick counter (and tests
/// can drive time by hand).
pub trait PatternClock {
    /// Current time in clock ticks, wrapping at 32 bits.
    fn now(&self) -> Tick;

    /// Convert a microsecond duration into clock ticks (floor, saturating).
    ///
    /// The default assumes one tick per microsecond; clocks with a coarser
    /// tick must override this.
    fn ticks_from_micros(&self, micros: u64) -> u32 {
        micros
            .saturating_mul(u64::from(TICKS_PER_MICRO))
            .min(u64::from(u32::MAX)) as u32
    }
}

/// Microsecond-resolution clock over [`std::time::Instant`].
///
/// Ticks count microseconds since construction and wrap every ~71 minutes;
/// the wrapping comparison in [`Tick`] keeps deadline checks correct across
/// the wrap.
#[derive(Debug, Clone)]
pub struct InstantClock {
    start: Instant,
}

impl InstantClock {
    /// Create a clock starting now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Create a clock with a specific start instant.
    pub fn with_start(start: Instant) -> Self {
        Self { start }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternClock for InstantClock {
    fn now(&self) -> Tick {
        // Truncation is the wrap.
        Tick::from_raw(self.start.elapsed().as_micros() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_instant_clock_advances() {
        let clock = InstantClock::new();
        let a = clock.now();
        std::thread::sleep(Duration::from_millis(2));
        let b = clock.now();
        assert!(b.happens_after(a));
    }

    #[test]
    fn test_default_micros_conversion() {
        let clock = InstantClock::new();
        assert_eq!(clock.ticks_from_micros(20_000), 20_000);
        assert_eq!(clock.ticks_from_micros(u64::MAX), u32::MAX);
    }
}
