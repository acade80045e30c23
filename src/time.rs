//! Millisecond clock abstraction for the control loop.

/// A point in time that can measure the milliseconds elapsed since an
/// earlier point.
pub trait TimeInstant: Copy {
    /// Milliseconds from `earlier` to `self`.
    fn millis_since(&self, earlier: Self) -> u64;
}

/// Source of the current time.
pub trait TimeSource {
    type Instant: TimeInstant;

    /// Returns the current time instant.
    fn now(&self) -> Self::Instant;
}

/// Millisecond tick counts from a 64-bit timer. A clock that went backwards
/// reads as zero elapsed.
impl TimeInstant for u64 {
    fn millis_since(&self, earlier: Self) -> u64 {
        self.saturating_sub(earlier)
    }
}

/// 32-bit tick counts wrap after ~49 days; wrapping subtraction keeps the
/// interval correct across one wrap.
impl TimeInstant for u32 {
    fn millis_since(&self, earlier: Self) -> u64 {
        self.wrapping_sub(earlier) as u64
    }
}
