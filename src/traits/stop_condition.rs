//! Predicates deciding when the poller stops.
//!
//! Provided implementations:
//!
//! * async closures returning `Result<bool, E>`;
//! * [`Blocking`] for fallible synchronous closures;
//! * [`StopWhen`] for infallible synchronous closures;
//! * [`Never`], the default predicate that keeps polling forever;
//! * [`Signaled`] over an `embassy-sync` [`Signal`], so another task can
//!   request the stop.
use core::future::Future;

use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};
use futures_util::future::ready;

use crate::traits::action::Blocking;

/// Contract for the stop predicate evaluated after the action and after each wait.
pub trait StopCondition<E> {
    /// `Ok(true)` terminates the poll loop.
    fn should_stop(&mut self) -> impl Future<Output = Result<bool, E>>;
}

impl<F, Fut, E> StopCondition<E> for F
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    fn should_stop(&mut self) -> impl Future<Output = Result<bool, E>> {
        (self)()
    }
}

impl<F, E> StopCondition<E> for Blocking<F>
where
    F: FnMut() -> Result<bool, E>,
{
    fn should_stop(&mut self) -> impl Future<Output = Result<bool, E>> {
        ready((self.0)())
    }
}

/// Infallible synchronous predicate.
#[derive(Debug, Clone, Copy)]
pub struct StopWhen<F>(pub F);

impl<F, E> StopCondition<E> for StopWhen<F>
where
    F: FnMut() -> bool,
{
    fn should_stop(&mut self) -> impl Future<Output = Result<bool, E>> {
        ready(Ok((self.0)()))
    }
}

/// Default predicate: never stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Never;

impl<E> StopCondition<E> for Never {
    fn should_stop(&mut self) -> impl Future<Output = Result<bool, E>> {
        ready(Ok(false))
    }
}

/// Stop once another task raised the wrapped [`Signal`].
///
/// The check does not consume the signal: it stays set, so every later
/// check (and every other poller watching it) also stops.
#[derive(Clone, Copy)]
pub struct Signaled<'a, M: RawMutex, T>(pub &'a Signal<M, T>);

impl<'a, M, T, E> StopCondition<E> for Signaled<'a, M, T>
where
    M: RawMutex,
    T: Send,
{
    fn should_stop(&mut self) -> impl Future<Output = Result<bool, E>> {
        ready(Ok(self.0.signaled()))
    }
}
