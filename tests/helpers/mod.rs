/// Test doubles driving the poller's waits during integration tests.
use korri_poll::PollTimer;
use tokio::time::{sleep, Duration, Instant};

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` to drive delays in tests.
pub struct MockTimer;

impl PollTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u64) {
        sleep(Duration::from_millis(millis)).await;
    }
}

#[derive(Default)]
#[allow(dead_code)]
/// Sleeping timer that also records what it was asked and how long it took.
pub struct RecordingTimer {
    pub requested: Vec<u64>,
    pub measured: Vec<Duration>,
}

impl PollTimer for RecordingTimer {
    async fn delay_ms(&mut self, millis: u64) {
        let started = Instant::now();
        sleep(Duration::from_millis(millis)).await;
        self.requested.push(millis);
        self.measured.push(started.elapsed());
    }
}
