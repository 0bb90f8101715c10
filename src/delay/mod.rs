//! Delay between two polling iterations.
//!
//! A delay is either a fixed number of milliseconds or a provider closure
//! that is evaluated once per iteration, right before the wait. Providers make
//! variable delays (backoff, jitter, schedule-driven intervals) possible
//! without any state inside the poller.
//!
//! Values are signed on purpose: a provider may compute a negative interval
//! (e.g. "deadline minus now"). The value handed to the timer is always
//! clamped to `max(0, value)`.
use core::time::Duration;

use crate::error::DelayError;

//==================================================================================DELAY
/// Tagged union between a fixed delay and a delay provider.
///
/// The default type parameter lets `Delay::fixed(10)` be written without
/// naming a provider type.
pub enum Delay<F = fn() -> i64> {
    /// Constant delay in milliseconds.
    Fixed(i64),
    /// Closure re-evaluated on every iteration, returning milliseconds.
    Provider(F),
}

impl Delay {
    /// Constant delay of `millis` milliseconds.
    pub const fn fixed(millis: i64) -> Self {
        Delay::Fixed(millis)
    }
}

impl<F> Delay<F>
where
    F: FnMut() -> i64,
{
    /// Delay computed by `provider` each time the poller is about to wait.
    pub fn provider(provider: F) -> Self {
        Delay::Provider(provider)
    }

    /// Resolve the delay for the current iteration.
    ///
    /// Calls the provider exactly once when present, then clamps the value to
    /// a non-negative millisecond count.
    pub fn next_millis(&mut self) -> u64 {
        let raw = match self {
            Delay::Fixed(millis) => *millis,
            Delay::Provider(provider) => provider(),
        };
        clamp_millis(raw)
    }

    /// Whether the delay is re-evaluated on each iteration.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Delay::Provider(_))
    }
}

impl<F> core::fmt::Debug for Delay<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Delay::Fixed(millis) => f.debug_tuple("Fixed").field(millis).finish(),
            Delay::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Clamp a signed millisecond count to the non-negative range used by timers.
#[inline]
pub fn clamp_millis(raw: i64) -> u64 {
    raw.max(0) as u64
}

//==================================================================================CONVERSIONS
impl From<u32> for Delay {
    fn from(millis: u32) -> Self {
        Delay::Fixed(millis as i64)
    }
}

impl From<i64> for Delay {
    fn from(millis: i64) -> Self {
        Delay::Fixed(millis)
    }
}

impl TryFrom<f64> for Delay {
    type Error = DelayError;

    /// Fractional milliseconds are truncated toward zero.
    /// Large negative values saturate, they clamp to zero anyway.
    fn try_from(millis: f64) -> Result<Self, Self::Error> {
        if !millis.is_finite() {
            return Err(DelayError::NotFinite);
        }
        // i64::MAX is not representable as f64; 2^63 is the first value past it.
        if millis >= 9_223_372_036_854_775_808.0 {
            return Err(DelayError::OutOfRange);
        }
        Ok(Delay::Fixed(millis as i64))
    }
}

impl TryFrom<Duration> for Delay {
    type Error = DelayError;

    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        let millis = i64::try_from(duration.as_millis()).map_err(|_| DelayError::OutOfRange)?;
        Ok(Delay::Fixed(millis))
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
