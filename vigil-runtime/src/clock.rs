//! Monotonic time source
//!
//! The core takes plain milliseconds; this maps them onto embassy-time.

use embassy_time::{Instant, Timer};

/// Milliseconds since the embassy-time epoch
pub fn now_ms() -> u64 {
    Instant::now().as_millis()
}

/// Sleep until an absolute deadline in milliseconds
pub async fn sleep_until(deadline_ms: u64) {
    Timer::at(Instant::from_millis(deadline_ms)).await
}
