//! Error definitions owned by the library.
//! Failures of the caller's action or stop condition are not wrapped here:
//! they travel back to the caller untouched.
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors raised while converting a value into a [`Delay`](crate::delay::Delay).
pub enum DelayError {
    /// Floating-point input is NaN or infinite.
    #[error("Delay is not a finite number")]
    NotFinite,
    /// Input does not fit in a signed 64-bit millisecond count.
    #[error("Delay does not fit in i64 milliseconds")]
    OutOfRange,
}
