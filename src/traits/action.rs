//! Work executed once per polling iteration.
//!
//! Any `FnMut() -> impl Future<Output = Result<T, E>>` is an action; the `T`
//! is discarded. Synchronous closures are wrapped in [`Blocking`].
use core::future::Future;

use futures_util::future::ready;

/// Contract for the operation run by the poller on each iteration.
pub trait Action<E> {
    /// Run the action once. Completion is awaited before the stop check.
    fn run(&mut self) -> impl Future<Output = Result<(), E>>;
}

impl<F, Fut, T, E> Action<E> for F
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    fn run(&mut self) -> impl Future<Output = Result<(), E>> {
        let pending = (self)();
        async move { pending.await.map(|_| ()) }
    }
}

/// Adapter for synchronous collaborators.
///
/// Wraps `FnMut() -> Result<T, E>` as an [`Action`] and
/// `FnMut() -> Result<bool, E>` as a
/// [`StopCondition`](crate::traits::stop_condition::StopCondition).
/// The returned future is already resolved, so no suspension happens.
#[derive(Debug, Clone, Copy)]
pub struct Blocking<F>(pub F);

impl<F, T, E> Action<E> for Blocking<F>
where
    F: FnMut() -> Result<T, E>,
{
    fn run(&mut self) -> impl Future<Output = Result<(), E>> {
        ready((self.0)().map(|_| ()))
    }
}
