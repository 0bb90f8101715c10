//! Asynchronous timer abstraction providing the wait between two iterations.

/// Timer used by the poller to suspend between iterations. Never a busy wait.
pub trait PollTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms(&mut self, millis: u64) -> impl core::future::Future<Output = ()>;
}

impl<T: PollTimer + ?Sized> PollTimer for &mut T {
    fn delay_ms(&mut self, millis: u64) -> impl core::future::Future<Output = ()> {
        (**self).delay_ms(millis)
    }
}

/// Timer backed by the `embassy-time` driver linked into the firmware.
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyTimer;

#[cfg(feature = "embassy")]
impl PollTimer for EmbassyTimer {
    async fn delay_ms(&mut self, millis: u64) {
        embassy_time::Timer::after_millis(millis).await;
    }
}
