//! `korri-poll` library: a `no_std` polling loop that runs an action, waits a
//! (possibly dynamic) delay, and repeats until a stop condition holds.
//! The crate exposes the loop itself, the delay model, and the traits that
//! plug in actions, stop conditions, and timers.
#![no_std]
//==================================================================================
/// Fixed or provider-based delays, clamped to non-negative milliseconds.
pub mod delay;
/// Errors raised while building delays.
pub mod error;
/// The polling loop and its state machine.
pub mod poller;
/// Abstraction traits: action, stop condition, and timer.
pub mod traits;
//==================================================================================
pub use delay::Delay;
pub use poller::{poll, poll_until, PollState, Poller};
pub use traits::action::{Action, Blocking};
pub use traits::poll_timer::PollTimer;
pub use traits::stop_condition::{Never, Signaled, StopCondition, StopWhen};
