//! Wall-clock time source.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use post_core::ports::Clock;

/// Nanosecond wall clock that never reports a value lower than one it
/// already handed out, even if the system time steps backwards.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicU64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }

    fn wall_nanos() -> u64 {
        Utc::now()
            .timestamp_nanos_opt()
            .and_then(|n| u64::try_from(n).ok())
            .unwrap_or(0)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        let reading = Self::wall_nanos();
        let previous = self.last.fetch_max(reading, Ordering::SeqCst);
        previous.max(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_non_decreasing() {
        let clock = SystemClock::new();
        let mut last = 0;
        for _ in 0..1_000 {
            let now = clock.now();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn test_never_goes_below_previous_reading() {
        let clock = SystemClock::new();
        clock.last.store(u64::MAX - 1, Ordering::SeqCst);
        assert_eq!(clock.now(), u64::MAX - 1);
    }
}
