//! Abstraction traits used by the poller (action, stop condition, and timer).
pub mod action;
pub mod poll_timer;
pub mod stop_condition;
