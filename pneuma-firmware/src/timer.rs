//! Monotonic clock for the cycle engine
//!
//! The engine busy-polls, so delays block the executor thread instead of
//! yielding. Nothing else runs while a session is active.

use embassy_time::{block_for, Duration, Instant};
use embedded_hal::delay::DelayNs;
use pneuma_core::traits::Clock;

/// Milliseconds since boot from the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

impl DelayNs for EmbassyClock {
    fn delay_ns(&mut self, ns: u32) {
        block_for(Duration::from_nanos(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
