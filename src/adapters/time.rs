//! Monotonic time and blocking delay.
//!
//! [`BlockingDelay`] implements [`DelayNs`] for the measurement window and
//! the self-test blink.  It keeps the single-task model: the calling task
//! blocks until the monotonic clock has advanced by the full duration.
//!
//! - **`target_os = "espidf"`** — `esp_idf_hal` FreeRTOS task delay, then a
//!   short spin on `esp_timer_get_time()` to cover tick rounding.
//! - **`not(target_os = "espidf")`** — `std::time::Instant` gated sleep.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

/// Microseconds since boot (monotonic).
#[cfg(target_os = "espidf")]
pub fn uptime_us() -> u64 {
    (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
}

/// Microseconds since the first call (monotonic).
#[cfg(not(target_os = "espidf"))]
pub fn uptime_us() -> u64 {
    use std::sync::OnceLock;
    static START: OnceLock<std::time::Instant> = OnceLock::new();
    START.get_or_init(std::time::Instant::now).elapsed().as_micros() as u64
}

/// Blocking delay gated on the monotonic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockingDelay;

impl BlockingDelay {
    pub fn new() -> Self {
        Self
    }

    fn block_for(&mut self, duration: Duration) {
        let deadline = uptime_us().saturating_add(duration.as_micros() as u64);
        sleep(duration);
        // Sleep granularity may return early; never shorten the window.
        while uptime_us() < deadline {
            core::hint::spin_loop();
        }
    }
}

/// Yield to FreeRTOS for the whole ticks in `duration`.  Truncates, so
/// the remainder is left to the spin in `block_for`.
#[cfg(target_os = "espidf")]
fn sleep(duration: Duration) {
    let ms = duration.as_millis().min(u128::from(u32::MAX)) as u32;
    esp_idf_hal::delay::FreeRtos::delay_ms(ms);
}

#[cfg(not(target_os = "espidf"))]
fn sleep(duration: Duration) {
    std::thread::sleep(duration);
}

impl DelayNs for BlockingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.block_for(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        self.block_for(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.block_for(Duration::from_millis(u64::from(ms)));
    }
}
