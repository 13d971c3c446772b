//! Wall-clock measurement of individual codec calls.

use std::time::{Duration, Instant};

/// Measures how long a closure takes.
pub trait Timer {
    /// Run `f` and return its result with the elapsed time.
    fn time<R>(&self, f: impl FnOnce() -> R) -> (R, Duration);
}

/// Monotonic clock timer backed by [`Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicTimer;

impl Timer for MonotonicTimer {
    fn time<R>(&self, f: impl FnOnce() -> R) -> (R, Duration) {
        let start = Instant::now();
        let result = f();
        (result, start.elapsed())
    }
}

/// Reports the same duration for every call. Used to check aggregation
/// independently of real clock noise.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimer(pub Duration);

impl Timer for FixedTimer {
    fn time<R>(&self, f: impl FnOnce() -> R) -> (R, Duration) {
        (f(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_timer_runs_closure() {
        let timer = FixedTimer(Duration::from_millis(3));
        let (value, elapsed) = timer.time(|| 6 * 7);
        assert_eq!(value, 42);
        assert_eq!(elapsed, Duration::from_millis(3));
    }

    #[test]
    fn monotonic_timer_measures_sleep() {
        let (_, elapsed) = MonotonicTimer.time(|| std::thread::sleep(Duration::from_millis(2)));
        assert!(elapsed >= Duration::from_millis(2));
    }
}
