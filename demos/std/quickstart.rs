//! # Quickstart Example
//!
//! Minimal example demonstrating the basics of korri-poll:
//! - Poll an action at a fixed delay until a condition holds
//! - Back off with a delay provider
//! - Stop a poller from another task with a signal
//!
//! This example uses `std` and tokio for a quick trial run. On embedded
//! targets, enable the `embassy` feature and use `EmbassyTimer` instead.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use std::cell::Cell;

use embassy_sync::{blocking_mutex::raw::NoopRawMutex, signal::Signal};
use korri_poll::{poll_until, Blocking, Delay, PollTimer, Poller, Signaled, StopWhen};
use tokio::time::{sleep, Duration, Instant};

/// Host timer built on `tokio::time::sleep`.
struct TokioTimer;

impl PollTimer for TokioTimer {
    async fn delay_ms(&mut self, millis: u64) {
        sleep(Duration::from_millis(millis)).await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== korri-poll Quickstart ===\n");
    let started = Instant::now();

    // ======================================================================
    // 1. Fixed delay, stop after three readings
    // ======================================================================
    println!("1. Fixed delay (50 ms), three readings");

    let readings = Cell::new(0u32);
    let result: Result<(), &str> = poll_until(
        TokioTimer,
        || {
            readings.set(readings.get() + 1);
            println!("   reading #{} at {:?}", readings.get(), started.elapsed());
            async { Ok(()) }
        },
        Delay::fixed(50),
        StopWhen(|| readings.get() >= 3),
    )
    .await;
    println!("   done: {:?}\n", result);

    // ======================================================================
    // 2. Exponential backoff through a delay provider
    // ======================================================================
    println!("2. Backoff provider (10, 20, 40, 80 ms)");

    let attempts = Cell::new(0u32);
    let mut backoff = 10i64;
    let result = poll_until(
        TokioTimer,
        Blocking(|| {
            attempts.set(attempts.get() + 1);
            Ok::<(), &str>(())
        }),
        Delay::provider(move || {
            let current = backoff;
            backoff *= 2;
            println!("   next wait: {} ms", current);
            current
        }),
        StopWhen(|| attempts.get() >= 5),
    )
    .await;
    println!("   {} attempts, result {:?}\n", attempts.get(), result);

    // ======================================================================
    // 3. External stop through a signal
    // ======================================================================
    println!("3. Stop requested by another task after 120 ms");

    let stop: Signal<NoopRawMutex, ()> = Signal::new();
    let mut poller = Poller::new(
        TokioTimer,
        Blocking(|| Ok::<(), &str>(())),
        Delay::fixed(25),
    )
    .stop_when(Signaled(&stop));

    let requester = async {
        sleep(Duration::from_millis(120)).await;
        stop.signal(());
    };
    let (result, ()) = tokio::join!(poller.run(), requester);

    println!(
        "   state: {:?}, iterations: {}, result: {:?}",
        poller.state(),
        poller.iterations(),
        result
    );
    println!("\n=== Done in {:?} ===", started.elapsed());
}
