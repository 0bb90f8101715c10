//! Polling loop: run an action, check the stop condition, wait, check again,
//! repeat.
//!
//! The loop has do-while semantics: the action always runs at least once.
//! The stop condition is checked twice per iteration:
//!
//! 1. right after the action, so a satisfied condition never pays for a wait;
//! 2. right after the wait, so no new action starts once the condition turned
//!    true during the wait.
//!
//! As a consequence the last wait before termination can be shorter than the
//! configured delay would suggest.
//!
//! Failures from the action or the stop condition end the loop at once and are
//! returned unchanged. There is no retry and no cancellation besides the stop
//! condition itself (or dropping the future).
use crate::delay::Delay;
use crate::traits::{
    action::Action,
    poll_timer::PollTimer,
    stop_condition::{Never, StopCondition},
};

//==================================================================================STATE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Lifecycle of a [`Poller`].
pub enum PollState {
    /// Initial state; the next `run` executes the action.
    Running,
    /// Terminal state, reached when the stop condition holds or a collaborator failed.
    Stopped,
}

//==================================================================================POLLER
/// Polling loop bundled with its collaborators.
///
/// Built with [`Poller::new`], optionally given a stop condition through
/// [`Poller::stop_when`], then driven by [`Poller::run`].
///
/// # Example
///
/// ```rust,ignore
/// use korri_poll::{Delay, Poller, StopWhen};
///
/// let mut poller = Poller::new(&mut timer, || refresh(), Delay::fixed(500))
///     .stop_when(StopWhen(|| done.get()));
/// poller.run().await?;
/// assert_eq!(poller.state(), PollState::Stopped);
/// ```
pub struct Poller<T, A, F, S = Never> {
    timer: T,
    action: A,
    delay: Delay<F>,
    stop: S,
    state: PollState,
    iterations: u64,
}

impl<T, A, F> Poller<T, A, F, Never> {
    /// Create a poller that never stops on its own.
    pub fn new(timer: T, action: A, delay: Delay<F>) -> Self {
        Self {
            timer,
            action,
            delay,
            stop: Never,
            state: PollState::Running,
            iterations: 0,
        }
    }
}

impl<T, A, F, S> Poller<T, A, F, S> {
    /// Replace the stop condition.
    pub fn stop_when<S2>(self, stop: S2) -> Poller<T, A, F, S2> {
        Poller {
            timer: self.timer,
            action: self.action,
            delay: self.delay,
            stop,
            state: self.state,
            iterations: self.iterations,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PollState {
        self.state
    }

    /// Number of actions that completed successfully.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

impl<T, A, F, S> Poller<T, A, F, S>
where
    T: PollTimer,
    F: FnMut() -> i64,
{
    /// Drive the loop until the stop condition holds.
    ///
    /// Returns `Ok(())` once stopping is confirmed, or the first error raised
    /// by the action or the stop condition. Either way the poller ends in
    /// [`PollState::Stopped`]; running a stopped poller again returns
    /// `Ok(())` without invoking anything.
    pub async fn run<E>(&mut self) -> Result<(), E>
    where
        A: Action<E>,
        S: StopCondition<E>,
    {
        if self.state == PollState::Stopped {
            return Ok(());
        }

        let outcome = self.drive().await;
        self.state = PollState::Stopped;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Poller stopped after {} iteration(s), failed: {}",
            self.iterations,
            outcome.is_err()
        );

        outcome
    }

    async fn drive<E>(&mut self) -> Result<(), E>
    where
        A: Action<E>,
        S: StopCondition<E>,
    {
        loop {
            // Step 1: run the action.
            self.action.run().await?;
            self.iterations = self.iterations.saturating_add(1);

            // Step 2: fast path, no wait when already done.
            if self.stop.should_stop().await? {
                return Ok(());
            }

            // Step 3: resolve and clamp the delay for this iteration.
            let millis = self.delay.next_millis();

            #[cfg(feature = "defmt")]
            defmt::trace!(
                "Iteration {} done, waiting {} ms",
                self.iterations,
                millis
            );

            // Step 4: suspend.
            self.timer.delay_ms(millis).await;

            // Step 5: the condition may have changed during the wait.
            if self.stop.should_stop().await? {
                return Ok(());
            }
        }
    }
}

//==================================================================================ENTRY_POINTS
/// Poll `action` every `delay` until `stop` returns `true`.
///
/// # Arguments
///
/// * `timer` – timer used for the waits (`&mut T` works too)
/// * `action` – executed at least once; its output is discarded
/// * `delay` – [`Delay::fixed`] or [`Delay::provider`], clamped to ≥ 0 ms
/// * `stop` – checked after each action and after each wait
///
/// # Errors
///
/// The first error from `action` or `stop`, unchanged.
pub async fn poll_until<T, A, F, S, E>(
    timer: T,
    action: A,
    delay: Delay<F>,
    stop: S,
) -> Result<(), E>
where
    T: PollTimer,
    A: Action<E>,
    F: FnMut() -> i64,
    S: StopCondition<E>,
{
    let mut poller = Poller::new(timer, action, delay).stop_when(stop);
    poller.run().await
}

/// Poll `action` every `delay` forever, or until the action fails.
pub async fn poll<T, A, F, E>(timer: T, action: A, delay: Delay<F>) -> Result<(), E>
where
    T: PollTimer,
    A: Action<E>,
    F: FnMut() -> i64,
{
    poll_until(timer, action, delay, Never).await
}
