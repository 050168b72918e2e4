//! Time abstraction traits for platform-agnostic timing.
//!
//! The picker never reads a clock on its own. Every timing decision is an
//! "has enough time elapsed" check between two instants supplied by the host,
//! so any monotonic source works, including wrapping 32-bit tick counters.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Returns true once `self` has reached `threshold`.
    #[inline]
    fn has_reached(&self, threshold: Self) -> bool {
        self.as_millis() >= threshold.as_millis()
    }
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond duration for hosts with a plain `now_ms()` counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u64);

impl TimeDuration for MillisDuration {
    const ZERO: Self = MillisDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        MillisDuration(millis)
    }
}

/// Instant read from a free-running 32-bit millisecond counter.
///
/// The counter wraps after ~49.7 days; `duration_since` uses wrapping
/// subtraction so intervals spanning the wrap are still measured correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisInstant(pub u32);

impl TimeInstant for MillisInstant {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(u64::from(self.0.wrapping_sub(earlier.0)))
    }
}

/// Any `Fn() -> MillisInstant` closure is a time source.
impl<F> TimeSource<MillisInstant> for F
where
    F: Fn() -> MillisInstant,
{
    fn now(&self) -> MillisInstant {
        self()
    }
}

#[cfg(feature = "embassy-time")]
mod embassy {
    use super::{TimeDuration, TimeInstant, TimeSource};

    /// Newtype wrapper for `embassy_time::Duration`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub struct EmbassyDuration(pub embassy_time::Duration);

    impl TimeDuration for EmbassyDuration {
        const ZERO: Self = EmbassyDuration(embassy_time::Duration::from_ticks(0));

        fn as_millis(&self) -> u64 {
            self.0.as_millis()
        }

        fn from_millis(millis: u64) -> Self {
            EmbassyDuration(embassy_time::Duration::from_millis(millis))
        }
    }

    /// Newtype wrapper for `embassy_time::Instant`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub struct EmbassyInstant(pub embassy_time::Instant);

    impl TimeInstant for EmbassyInstant {
        type Duration = EmbassyDuration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            EmbassyDuration(self.0.saturating_duration_since(earlier.0))
        }
    }

    /// Time source backed by the Embassy time driver.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct EmbassyTimeSource;

    impl TimeSource<EmbassyInstant> for EmbassyTimeSource {
        fn now(&self) -> EmbassyInstant {
            EmbassyInstant(embassy_time::Instant::now())
        }
    }
}

#[cfg(feature = "embassy-time")]
pub use embassy::{EmbassyDuration, EmbassyInstant, EmbassyTimeSource};
