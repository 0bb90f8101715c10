//! Unit tests for `Delay` resolution and conversions.
use super::*;

//==================================================================================CLAMP
#[test]
/// Negative values never reach the timer.
fn test_clamp_millis() {
    assert_eq!(clamp_millis(-1), 0);
    assert_eq!(clamp_millis(i64::MIN), 0);
    assert_eq!(clamp_millis(0), 0);
    assert_eq!(clamp_millis(250), 250);
    assert_eq!(clamp_millis(i64::MAX), i64::MAX as u64);
}

//==================================================================================RESOLUTION
#[test]
/// A fixed delay resolves to the same value every time.
fn test_fixed_is_stable() {
    let mut delay = Delay::fixed(10);
    assert!(!delay.is_dynamic());
    assert_eq!(delay.next_millis(), 10);
    assert_eq!(delay.next_millis(), 10);

    let mut negative = Delay::fixed(-40);
    assert_eq!(negative.next_millis(), 0);
}

#[test]
/// The provider is called once per resolution, and its output is clamped.
fn test_provider_called_once_per_resolution() {
    let mut calls = 0i64;
    let mut delay = Delay::provider(|| {
        calls += 1;
        100 * calls - 150
    });
    assert!(delay.is_dynamic());

    assert_eq!(delay.next_millis(), 0); // -50 clamped
    assert_eq!(delay.next_millis(), 50);
    assert_eq!(delay.next_millis(), 150);
    drop(delay);
    assert_eq!(calls, 3);
}

//==================================================================================CONVERSIONS
fn from_f64(millis: f64) -> Result<Delay, DelayError> {
    Delay::try_from(millis)
}

#[test]
/// Integer conversions map straight onto `Fixed`.
fn test_integer_conversions() {
    let unsigned: Delay = 15u32.into();
    let signed: Delay = (-3i64).into();
    assert!(matches!(unsigned, Delay::Fixed(15)));
    assert!(matches!(signed, Delay::Fixed(-3)));
}

#[test]
/// Floating-point input is truncated, non-finite or oversized input is refused.
fn test_float_conversion() {
    assert!(matches!(from_f64(12.9), Ok(Delay::Fixed(12))));
    assert!(matches!(from_f64(-0.5), Ok(Delay::Fixed(0))));
    assert!(matches!(from_f64(-1e300), Ok(Delay::Fixed(i64::MIN))));
    assert_eq!(from_f64(f64::NAN).unwrap_err(), DelayError::NotFinite);
    assert_eq!(from_f64(f64::INFINITY).unwrap_err(), DelayError::NotFinite);
    assert_eq!(from_f64(1e19).unwrap_err(), DelayError::OutOfRange);
}

#[test]
/// `Duration` keeps whole milliseconds only.
fn test_duration_conversion() {
    let delay: Delay = Duration::from_micros(2_500).try_into().unwrap();
    assert!(matches!(delay, Delay::Fixed(2)));

    let oversized: Result<Delay, DelayError> = Duration::MAX.try_into();
    assert_eq!(oversized.unwrap_err(), DelayError::OutOfRange);
}
